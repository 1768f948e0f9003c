// Use cases layer: result store workflows.

pub mod clear_history;
pub mod list_history;
pub mod save_result;

#[cfg(test)]
pub(crate) mod test_support;
