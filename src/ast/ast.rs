use std::fmt::{self, Display};

use super::statements::Stmt;

/// Root of every parse. Owns its statements in source order; dropping the
/// program drops the whole tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Literal of the first statement's introducing token, or `""` for an
    /// empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token().literal.as_str())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
