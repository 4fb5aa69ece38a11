use crate::lang::Dialect;
use crate::mach::{Halt, Interpreter, Options};
use crate::world::{Map, Robot};


fn robot(map: &str) -> Robot {
    let map: Map = map.parse().unwrap();
    let (pos, heading) = map.start.unwrap();
    Robot::new(map.world, pos, heading)
}

fn program(src: &str) -> Interpreter {
    Interpreter::new(src.split('/')).unwrap()
}

fn extended(src: &str) -> Interpreter {
    let options = Options {
        dialect: Dialect::Extended,
        ..Options::default()
    };
    Interpreter::with_options(src.split('/'), options).unwrap()
}

fn budgeted(src: &str, instruction_budget: usize) -> Interpreter {
    let options = Options {
        instruction_budget,
        ..Options::default()
    };
    Interpreter::with_options(src.split('/'), options).unwrap()
}

fn exec(interpreter: &mut Interpreter, robot: &mut Robot) -> Halt {
    interpreter.execute(robot).unwrap()
}
