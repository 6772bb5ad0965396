use std::fmt::Debug;
pub mod error;
pub mod result;

pub trait WithFnContext<S: Into<String>, O: Debug + 'static> {
    fn with_fn_context(self, obj: O, fn_name: S) -> Self;
}

pub trait WithMsg<S: Into<String>> {
    fn with_msg(self, msg: S) -> Self;
}
