mod arg;

pub use arg::{ArgError, FromArg};

use bytes::Bytes;

/// An inbound command carrying at most one argument.
///
/// The payload stays undecoded until a handler asks for it with
/// [`Command::get_arg`], so the handler decides which type it expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    arg: Option<Bytes>,
}

impl Command {
    pub fn bare() -> Self {
        Self { arg: None }
    }

    pub fn with_arg(payload: impl Into<Bytes>) -> Self {
        Self { arg: Some(payload.into()) }
    }

    /// Builds a command from the argument list handed over by a dispatcher.
    pub fn from_protocol(
        args: impl IntoIterator<Item = Bytes>,
    ) -> anyhow::Result<Self> {
        let mut args = args.into_iter();
        let arg = args.next();
        let extra = args.count();

        if extra > 0 {
            log::debug!("Rejecting command with {} arguments", extra + 1);
            anyhow::bail!(
                "Commands take at most one argument, got {}",
                extra + 1
            )
        }

        Ok(Self { arg })
    }

    pub fn has_arg(&self) -> bool {
        self.arg.is_some()
    }

    /// Decodes the argument as `T`.
    ///
    /// Fails with [`ArgError::Absent`] on a bare command instead of
    /// returning a default; check [`Command::has_arg`] first or use
    /// [`Command::arg_or`].
    pub fn get_arg<T: FromArg>(&self) -> Result<T, ArgError> {
        match &self.arg {
            Some(payload) => T::from_arg(payload),
            None => Err(ArgError::Absent),
        }
    }

    /// Decodes the argument as `T`, or hands back `default` when none was sent.
    pub fn arg_or<T: FromArg>(&self, default: T) -> Result<T, ArgError> {
        if self.has_arg() {
            self.get_arg()
        } else {
            Ok(default)
        }
    }
}
