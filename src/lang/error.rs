use super::LineNumber;

/// ## Syntax errors and runtime faults
///
/// Construction of a program can fail with a syntax error; running one can
/// fail with a runtime fault. Both are carried by this one type, see
/// [`Error::is_syntax`].

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    pc: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$pc:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_pc($pc)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$pc:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_pc($pc)
            .message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            pc: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Syntax errors are raised while building a program and can be fixed by
    /// the caller. Everything else aborted a run.
    pub fn is_syntax(&self) -> bool {
        self.code.is_syntax()
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn pc(&self) -> Option<usize> {
        self.pc
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn at_pc(self, pc: usize) -> Error {
        debug_assert!(self.pc.is_none());
        Error {
            pc: Some(pc),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidToken = 1,
    TooManyDistinctTokens = 2,
    UnmatchedBlock = 3,
    InvalidMap = 4,
    SensorOutsideCondition = 21,
    UnknownOpcode = 22,
    MissingCount = 23,
    MissingSensor = 24,
    StackOverflow = 25,
    InternalError = 51,
    FileNotFound = 53,
}

impl ErrorCode {
    pub fn is_syntax(self) -> bool {
        (self as u16) < 20
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            InvalidToken => "INVALID TOKEN",
            TooManyDistinctTokens => "TOO MANY DISTINCT TOKENS",
            UnmatchedBlock => "BLOCK WITHOUT END",
            InvalidMap => "INVALID MAP",
            SensorOutsideCondition => "SENSOR WITHOUT IF OR WHILE",
            UnknownOpcode => "UNKNOWN OPCODE",
            MissingCount => "LOOP WITHOUT COUNT",
            MissingSensor => "CONDITION WITHOUT SENSOR",
            StackOverflow => "CONTROL STACK OVERFLOW",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
        };
        write!(f, "{}", s)
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" LINE {}", line_number));
        }
        if let Some(pc) = self.pc {
            suffix.push_str(&format!(" PC {}", pc));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code)
        } else if suffix.starts_with(';') {
            write!(f, "{}{}", self.code, suffix)
        } else {
            write!(f, "{} IN{}", self.code, suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    #[test]
    fn test_display() {
        assert_eq!(error!(UnmatchedBlock).to_string(), "BLOCK WITHOUT END");
        assert_eq!(
            error!(InvalidToken, Some(3); "JUMP").to_string(),
            "INVALID TOKEN IN LINE 3; JUMP"
        );
        assert_eq!(
            error!(UnknownOpcode, ..7).to_string(),
            "UNKNOWN OPCODE IN PC 7"
        );
        assert_eq!(
            error!(TooManyDistinctTokens; "21 OF 20").to_string(),
            "TOO MANY DISTINCT TOKENS; 21 OF 20"
        );
    }

    #[test]
    fn test_syntax_or_runtime() {
        assert!(error!(InvalidToken).is_syntax());
        assert!(error!(UnmatchedBlock).is_syntax());
        assert!(!error!(SensorOutsideCondition).is_syntax());
        assert!(!error!(UnknownOpcode, ..0).is_syntax());
    }
}
