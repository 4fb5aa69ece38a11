use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<String, Token> = Action::ALL
        .iter()
        .map(|x| Token::Action(*x))
        .chain(Control::ALL.iter().map(|x| Token::Control(*x)))
        .chain(Sensor::ALL.iter().map(|x| Token::Sensor(*x)))
        .chain(State::ALL.iter().map(|x| Token::State(*x)))
        .chain(Extension::ALL.iter().map(|x| Token::Extension(*x)))
        .map(|t| (t.to_string(), t))
        .collect();
);

/// Which keyword set the tokenizer accepts.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Dialect {
    /// The sixteen keywords of the base language.
    Core,
    /// The base language plus the [`Extension`] words.
    Extended,
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Core
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Token {
    Action(Action),
    Control(Control),
    Sensor(Sensor),
    State(State),
    Extension(Extension),
    Integer(u32),
}

impl Token {
    /// Keyword lookup. Expects an uppercase word.
    pub fn from_string(s: &str, dialect: Dialect) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| match stt.get(s) {
            Some(Token::Extension(_)) if dialect == Dialect::Core => None,
            Some(t) => Some(*t),
            None => None,
        })
    }

    /// LOOP, WHILE and IF each need a matching END.
    pub fn is_opener(&self) -> bool {
        matches!(
            self,
            Token::Control(Control::Loop) | Token::Control(Control::While) | Token::Control(Control::If)
        )
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Token::Control(Control::End))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Token::Integer(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Action(s) => write!(f, "{}", s),
            Control(s) => write!(f, "{}", s),
            Sensor(s) => write!(f, "{}", s),
            State(s) => write!(f, "{}", s),
            Extension(s) => write!(f, "{}", s),
            Integer(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Action {
    Move,
    Left,
    Right,
    Rturn,
    Pick,
    Open,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Move,
        Action::Left,
        Action::Right,
        Action::Rturn,
        Action::Pick,
        Action::Open,
    ];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Action::*;
        match self {
            Move => write!(f, "MOVE"),
            Left => write!(f, "LEFT"),
            Right => write!(f, "RIGHT"),
            Rturn => write!(f, "RTURN"),
            Pick => write!(f, "PICK"),
            Open => write!(f, "OPEN"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Control {
    Loop,
    While,
    If,
    End,
}

impl Control {
    pub const ALL: [Control; 4] = [Control::Loop, Control::While, Control::If, Control::End];
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Control::*;
        match self {
            Loop => write!(f, "LOOP"),
            While => write!(f, "WHILE"),
            If => write!(f, "IF"),
            End => write!(f, "END"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Sensor {
    Front,
    Key,
    Door,
    Exit,
}

impl Sensor {
    pub const ALL: [Sensor; 4] = [Sensor::Front, Sensor::Key, Sensor::Door, Sensor::Exit];
}

impl std::fmt::Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Sensor::*;
        match self {
            Front => write!(f, "FRONT"),
            Key => write!(f, "KEY"),
            Door => write!(f, "DOOR"),
            Exit => write!(f, "EXIT"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum State {
    Set,
    Clr,
}

impl State {
    pub const ALL: [State; 2] = [State::Set, State::Clr];
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use State::*;
        match self {
            Set => write!(f, "SET"),
            Clr => write!(f, "CLR"),
        }
    }
}

/// Words only recognized by [`Dialect::Extended`].
///
/// The compass and modifier words tokenize but have no executable meaning;
/// reaching one at run time is a fault.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Extension {
    Wait,
    Mark,
    Goto,
    Scan,
    Count,
    Save,
    Load,
    North,
    South,
    East,
    West,
    All,
    Items,
}

impl Extension {
    pub const ALL: [Extension; 13] = [
        Extension::Wait,
        Extension::Mark,
        Extension::Goto,
        Extension::Scan,
        Extension::Count,
        Extension::Save,
        Extension::Load,
        Extension::North,
        Extension::South,
        Extension::East,
        Extension::West,
        Extension::All,
        Extension::Items,
    ];
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Extension::*;
        match self {
            Wait => write!(f, "WAIT"),
            Mark => write!(f, "MARK"),
            Goto => write!(f, "GOTO"),
            Scan => write!(f, "SCAN"),
            Count => write!(f, "COUNT"),
            Save => write!(f, "SAVE"),
            Load => write!(f, "LOAD"),
            North => write!(f, "NORTH"),
            South => write!(f, "SOUTH"),
            East => write!(f, "EAST"),
            West => write!(f, "WEST"),
            All => write!(f, "ALL"),
            Items => write!(f, "ITEMS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("MOVE", Dialect::Core);
        assert_eq!(t, Some(Token::Action(Action::Move)));
        let t = Token::from_string("PICKLES", Dialect::Core);
        assert_eq!(t, None);
    }

    #[test]
    fn test_extension_words_need_dialect() {
        assert_eq!(Token::from_string("WAIT", Dialect::Core), None);
        assert_eq!(
            Token::from_string("WAIT", Dialect::Extended),
            Some(Token::Extension(Extension::Wait))
        );
        assert_eq!(
            Token::from_string("END", Dialect::Extended),
            Some(Token::Control(Control::End))
        );
    }

    #[test]
    fn test_keyword_counts() {
        let core = STRING_TO_TOKEN.with(|stt| {
            stt.values()
                .filter(|t| !matches!(t, Token::Extension(_)))
                .count()
        });
        assert_eq!(core, 16);
        assert_eq!(STRING_TO_TOKEN.with(|stt| stt.len()), 29);
    }
}
