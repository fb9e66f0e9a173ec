mod listings;
pub use listings::Listings;
