use super::{Address, Extensions, Frame, Program, Report, Scan, Stack, DEFAULT_INSTRUCTION_BUDGET};
use crate::error;
use crate::lang::token::{Action, Control, Extension, Sensor, State};
use crate::lang::{Dialect, Error, Token};
use crate::world::{Heading, Pos, Robot};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter settings

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Steps allowed per run before giving up.
    pub instruction_budget: usize,
    pub dialect: Dialect,
    /// How many recent steps to keep for [`Interpreter::history`].
    pub history: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            instruction_budget: DEFAULT_INSTRUCTION_BUDGET,
            dialect: Dialect::Core,
            history: 0,
        }
    }
}

/// Why a run stopped without a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    Escaped,
    Completed,
    BudgetExceeded,
}

/// One dispatched instruction and the robot as it was before it ran.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub pc: Address,
    pub token: Token,
    pub position: Pos,
    pub heading: Heading,
    pub has_key: bool,
    pub door_opened: bool,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>4} {:<6} ({}, {}) {}{}{}",
            self.pc,
            self.token.to_string(),
            self.position.0,
            self.position.1,
            self.heading,
            if self.has_key { " KEY" } else { "" },
            if self.door_opened { " OPEN" } else { "" }
        )
    }
}

/// ## Program runner
///
/// Holds one immutable [`Program`] and the registers of the run in progress:
/// the program counter, the control stack and the flag. Every call to
/// [`run`](Interpreter::run) starts those over; the robot is left as the
/// caller handed it in.

#[derive(Debug, Clone)]
pub struct Interpreter {
    program: Program,
    options: Options,
    pc: Address,
    stack: Stack<Frame>,
    flag: bool,
    instruction_count: usize,
    history: VecDeque<Step>,
    ext: Extensions,
}

impl Interpreter {
    pub fn new<I, S>(lines: I) -> Result<Interpreter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Interpreter::with_options(lines, Options::default())
    }

    pub fn with_options<I, S>(lines: I, options: Options) -> Result<Interpreter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let program = Program::new(lines, options.dialect)?;
        Ok(Interpreter::from_program(program, options))
    }

    pub fn from_program(program: Program, options: Options) -> Interpreter {
        Interpreter {
            program,
            options,
            pc: 0,
            stack: Stack::new("BLOCKS NESTED TOO DEEP"),
            flag: false,
            instruction_count: 0,
            history: VecDeque::new(),
            ext: Extensions::default(),
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn report(&self) -> Report {
        self.program.report()
    }

    pub fn distinct_token_count(&self) -> usize {
        self.program.distinct_token_count()
    }

    pub fn instruction_count(&self) -> usize {
        self.instruction_count
    }

    pub fn instruction_budget(&self) -> usize {
        self.options.instruction_budget
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn flag(&self) -> bool {
        self.flag
    }

    /// Current nesting of open LOOP and WHILE bodies.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.stack.iter()
    }

    pub fn history(&self) -> impl Iterator<Item = &Step> {
        self.history.iter()
    }

    pub fn marks(&self) -> &[Pos] {
        self.ext.marks()
    }

    pub fn scan(&self) -> Option<Scan> {
        self.ext.scan()
    }

    pub fn count(&self) -> Option<usize> {
        self.ext.count()
    }

    /// Run to the end and report whether the robot escaped.
    pub fn run(&mut self, robot: &mut Robot) -> Result<bool> {
        Ok(self.execute(robot)? == Halt::Escaped)
    }

    pub fn execute(&mut self, robot: &mut Robot) -> Result<Halt> {
        self.reset();
        let budget = self.options.instruction_budget;
        info!(tokens = self.program.len(), budget, "run started");
        while self.pc < self.program.len() && !robot.escaped() && self.instruction_count < budget {
            self.instruction_count += 1;
            let position = robot.position();
            if let Err(error) = self.step(robot) {
                self.fault(&error);
                return Err(error);
            }
            // An exit releases on contact; an opened door only when stepped onto.
            if robot.position() != position || robot.at_exit() {
                robot.check_escape();
            }
        }
        let halt = if robot.escaped() {
            Halt::Escaped
        } else if self.pc >= self.program.len() {
            Halt::Completed
        } else {
            Halt::BudgetExceeded
        };
        if halt == Halt::BudgetExceeded {
            warn!(pc = self.pc, budget, "instruction budget exhausted");
        }
        info!(
            ?halt,
            instructions = self.instruction_count,
            position = ?robot.position(),
            has_key = robot.has_key(),
            door_opened = robot.door_opened(),
            "run finished"
        );
        Ok(halt)
    }

    fn reset(&mut self) {
        self.pc = 0;
        self.stack.clear();
        self.flag = false;
        self.instruction_count = 0;
        self.history.clear();
        self.ext.clear();
    }

    fn fault(&self, error: &Error) {
        tracing::error!(pc = self.pc, %error, "run aborted");
        for step in self.history.iter() {
            tracing::error!("  {}", step);
        }
    }

    fn record(&mut self, token: Token, robot: &Robot) {
        if self.options.history == 0 {
            return;
        }
        if self.history.len() == self.options.history {
            self.history.pop_front();
        }
        self.history.push_back(Step {
            pc: self.pc,
            token,
            position: robot.position(),
            heading: robot.heading(),
            has_key: robot.has_key(),
            door_opened: robot.door_opened(),
        });
    }

    fn step(&mut self, robot: &mut Robot) -> Result<()> {
        let pc = self.pc;
        let token = match self.program.get(pc) {
            Some(token) => token,
            None => return Err(error!(InternalError, ..pc; "PC OUT OF RANGE")),
        };
        debug!(pc, %token, position = ?robot.position(), heading = %robot.heading(), "step");
        self.record(token, robot);
        match token {
            Token::Action(action) => {
                act(action, robot);
                self.pc = pc + 1;
            }
            Token::Control(Control::Loop) => {
                let remaining = match self.program.get(pc + 1) {
                    Some(Token::Integer(n)) => n,
                    _ => return Err(error!(MissingCount, ..pc)),
                };
                let end = self.program.end_for(pc)?;
                self.stack.push(Frame::Loop {
                    body_start: pc + 2,
                    end,
                    remaining,
                })?;
                self.pc = pc + 2;
            }
            Token::Control(Control::While) => {
                let sensor = self.sensor_after(pc)?;
                let end = self.program.end_for(pc)?;
                if robot.sense(sensor) {
                    self.stack.push(Frame::While {
                        start: pc,
                        end,
                        sensor,
                    })?;
                    self.pc = pc + 2;
                } else {
                    self.pc = end + 1;
                }
            }
            Token::Control(Control::If) => {
                let sensor = self.sensor_after(pc)?;
                let end = self.program.end_for(pc)?;
                self.pc = if robot.sense(sensor) { pc + 2 } else { end + 1 };
            }
            Token::Control(Control::End) => self.end(pc, robot)?,
            Token::State(State::Set) => {
                self.flag = true;
                self.pc = pc + 1;
            }
            Token::State(State::Clr) => {
                self.flag = false;
                self.pc = pc + 1;
            }
            Token::Sensor(sensor) => {
                return Err(error!(SensorOutsideCondition, ..pc; sensor.to_string()));
            }
            Token::Integer(_) => self.pc = pc + 1,
            Token::Extension(extension) => self.extension(extension, robot)?,
        }
        Ok(())
    }

    fn sensor_after(&self, pc: Address) -> Result<Sensor> {
        match self.program.get(pc + 1) {
            Some(Token::Sensor(sensor)) => Ok(sensor),
            Some(token) => Err(error!(MissingSensor, ..pc; token.to_string())),
            None => Err(error!(MissingSensor, ..pc)),
        }
    }

    fn end(&mut self, pc: Address, robot: &Robot) -> Result<()> {
        let frame = match self.stack.last_mut() {
            Some(frame) if frame.end() == pc => frame,
            _ => {
                self.pc = pc + 1;
                return Ok(());
            }
        };
        match frame {
            Frame::Loop {
                body_start,
                remaining,
                ..
            } => {
                *remaining = remaining.saturating_sub(1);
                if *remaining > 0 {
                    self.pc = *body_start;
                    return Ok(());
                }
            }
            Frame::While { start, sensor, .. } => {
                if robot.sense(*sensor) {
                    let start = *start;
                    self.stack.pop()?;
                    self.pc = start;
                    return Ok(());
                }
            }
        }
        self.stack.pop()?;
        self.pc = pc + 1;
        Ok(())
    }

    fn extension(&mut self, extension: Extension, robot: &mut Robot) -> Result<()> {
        let pc = self.pc;
        match extension {
            Extension::Wait => {
                let (steps, width) = match self.program.get(pc + 1) {
                    Some(Token::Integer(n)) => (n, 2),
                    _ => (1, 1),
                };
                if self.ext.wait(steps) {
                    self.pc = pc + width;
                }
                return Ok(());
            }
            Extension::Mark => self.ext.mark(robot),
            Extension::Goto => self.ext.goto(robot),
            Extension::Scan => self.ext.scan_around(robot),
            Extension::Count => self.ext.count_around(robot),
            Extension::Save => self.ext.save(robot, self.flag)?,
            Extension::Load => {
                if let Some(flag) = self.ext.load(robot)? {
                    self.flag = flag;
                }
            }
            Extension::North
            | Extension::South
            | Extension::East
            | Extension::West
            | Extension::All
            | Extension::Items => {
                return Err(error!(UnknownOpcode, ..pc; extension.to_string()));
            }
        }
        self.pc = pc + 1;
        Ok(())
    }
}

fn act(action: Action, robot: &mut Robot) {
    match action {
        Action::Move => {
            robot.move_forward();
        }
        Action::Left => robot.turn_left(),
        Action::Right => robot.turn_right(),
        Action::Rturn => robot.random_turn(),
        Action::Pick => {
            robot.pick_key();
        }
        Action::Open => {
            robot.open_door();
        }
    }
}
