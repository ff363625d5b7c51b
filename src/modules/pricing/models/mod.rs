mod price_summary;

pub use price_summary::PriceSummary;
