// Interface adapters: wire protocol and the results service client.

pub mod clients;
pub mod protocol;
