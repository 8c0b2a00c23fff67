//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod translate;

pub(crate) use convert::ConvertArgs;
pub(crate) use translate::TranslateArgs;
