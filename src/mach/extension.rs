use super::Stack;
use crate::lang::Error;
use crate::world::{Heading, Pos, Robot, Snapshot};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// What `SCAN` saw: whether each heading is clear, in
/// [`Heading::ALL`] order, and the sensors for the tile underfoot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    pub clear: [bool; 4],
    pub on_key: bool,
    pub at_door: bool,
    pub at_exit: bool,
}

#[derive(Debug, Clone)]
struct Saved {
    snapshot: Snapshot,
    marks: Vec<Pos>,
    flag: bool,
}

/// ## Extended dialect state
///
/// Lives next to the control stack and is cleared at the start of a run.

#[derive(Debug, Clone)]
pub struct Extensions {
    marks: Vec<Pos>,
    saved: Stack<Saved>,
    scan: Option<Scan>,
    count: Option<usize>,
    waiting: Option<u32>,
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions {
            marks: vec![],
            saved: Stack::new("TOO MANY SAVED STATES"),
            scan: None,
            count: None,
            waiting: None,
        }
    }
}

impl Extensions {
    pub fn clear(&mut self) {
        self.marks.clear();
        self.saved.clear();
        self.scan = None;
        self.count = None;
        self.waiting = None;
    }

    pub fn marks(&self) -> &[Pos] {
        &self.marks
    }

    pub fn scan(&self) -> Option<Scan> {
        self.scan
    }

    pub fn count(&self) -> Option<usize> {
        self.count
    }

    /// One busy step of `WAIT n`. True once the wait is over.
    pub fn wait(&mut self, steps: u32) -> bool {
        let remaining = self.waiting.get_or_insert(steps.max(1));
        *remaining -= 1;
        if *remaining == 0 {
            self.waiting = None;
            true
        } else {
            false
        }
    }

    pub fn mark(&mut self, robot: &Robot) {
        self.marks.push(robot.position());
        debug!(position = ?robot.position(), "marked");
    }

    /// Turn toward the latest mark, or step toward it when already facing it.
    pub fn goto(&self, robot: &mut Robot) {
        let target = match self.marks.last() {
            Some(target) => *target,
            None => return,
        };
        let (x, y) = robot.position();
        let (dx, dy) = (target.0 - x, target.1 - y);
        let want = if dx > 0 {
            Heading::East
        } else if dx < 0 {
            Heading::West
        } else if dy > 0 {
            Heading::North
        } else if dy < 0 {
            Heading::South
        } else {
            return;
        };
        let heading = robot.heading();
        if heading == want {
            robot.move_forward();
        } else if heading.left() == want {
            robot.turn_left();
        } else {
            robot.turn_right();
        }
    }

    pub fn scan_around(&mut self, robot: &Robot) {
        let mut clear = [false; 4];
        for (slot, heading) in clear.iter_mut().zip(Heading::ALL.iter()) {
            *slot = robot.clear_toward(*heading);
        }
        self.scan = Some(Scan {
            clear,
            on_key: robot.on_key(),
            at_door: robot.at_door(),
            at_exit: robot.at_exit(),
        });
    }

    pub fn count_around(&mut self, robot: &Robot) {
        self.count = Some(robot.count_nearby());
    }

    pub fn save(&mut self, robot: &Robot, flag: bool) -> Result<()> {
        self.saved.push(Saved {
            snapshot: robot.snapshot(),
            marks: self.marks.clone(),
            flag,
        })
    }

    /// Restores the last save and returns its flag register, if any was saved.
    pub fn load(&mut self, robot: &mut Robot) -> Result<Option<bool>> {
        if self.saved.is_empty() {
            return Ok(None);
        }
        let saved = self.saved.pop()?;
        robot.restore(saved.snapshot);
        self.marks = saved.marks;
        Ok(Some(saved.flag))
    }
}
