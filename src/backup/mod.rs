pub mod engine;
pub mod exclusion;
pub mod journal;
pub mod menu;
pub mod result_error;
pub mod run_config;
pub mod validate;
pub mod walk;

macro_rules! function_path {
    () => {
        concat!(module_path!(), "::", function_name!(), " ", file!(), ":", line!())
    };
}

pub(crate) use function_path;
