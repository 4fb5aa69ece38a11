/*!
# Instructions

The extended set, enabled with `--extended`, adds `WAIT`, `MARK`, `GOTO`,
`SCAN`, `COUNT`, `SAVE` and `LOAD`. It also reserves `NORTH`, `SOUTH`,
`EAST`, `WEST`, `ALL` and `ITEMS`, which tokenize but cannot be run.
*/

#[path = "instructions/move.rs"]
#[allow(non_snake_case)]
pub mod MOVE;

#[path = "instructions/turn.rs"]
#[allow(non_snake_case)]
pub mod LEFT_RIGHT_RTURN;

#[path = "instructions/pick.rs"]
#[allow(non_snake_case)]
pub mod PICK;

#[path = "instructions/open.rs"]
#[allow(non_snake_case)]
pub mod OPEN;

#[path = "instructions/loop.rs"]
#[allow(non_snake_case)]
pub mod LOOP;

#[path = "instructions/while.rs"]
#[allow(non_snake_case)]
pub mod WHILE;

#[path = "instructions/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "instructions/set.rs"]
#[allow(non_snake_case)]
pub mod SET_CLR;

#[path = "instructions/wait.rs"]
#[allow(non_snake_case)]
pub mod WAIT;

#[path = "instructions/mark.rs"]
#[allow(non_snake_case)]
pub mod MARK_GOTO;

#[path = "instructions/scan.rs"]
#[allow(non_snake_case)]
pub mod SCAN_COUNT;

#[path = "instructions/save.rs"]
#[allow(non_snake_case)]
pub mod SAVE_LOAD;
