use std::fmt::{Debug, Display};
pub struct ImposeError(pub String);

impl Display for ImposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for ImposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ImposeError").field(&self.0).finish()
    }
}

impl std::error::Error for ImposeError {}

#[macro_export]
macro_rules! im_err {
    ($($arg:tt)+) => {
        $crate::error::ImposeError(format!(
            "impose: {} @ {}:{}:{}",
            format_args!($($arg)+),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! im_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::im_err!("{}", err));
            }
        }
    };
}
