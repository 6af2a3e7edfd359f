pub mod order;

pub use order::{OrderSubmission, GARMENT_SIZES, MERCH_CHOICES};
