mod common;
mod roc;
mod total;
