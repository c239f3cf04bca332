pub mod lead;

pub use lead::{Lead, LeadStatus};
