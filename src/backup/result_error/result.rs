use crate::backup::result_error::error::Error;
use crate::backup::result_error::{WithFnContext, WithMsg};
use std::fmt::Debug;

pub type Result<T> = std::result::Result<T, Error>;

impl<S: Into<String>, O: Debug + Send + 'static, R> WithFnContext<S, O> for Result<R> {
    fn with_fn_context(self, obj: O, fn_name: S) -> Self {
        self.map_err(|e| e.with_fn_context(obj, fn_name))
    }
}

impl<R, S: Into<String>> WithMsg<S> for Result<R> {
    fn with_msg(self, msg: S) -> Self {
        self.map_err(|e| e.with_msg(msg))
    }
}

pub fn collect_faults(errors: Vec<Error>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into())
    }
}
