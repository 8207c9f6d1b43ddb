pub mod api;
pub mod entities;
pub mod error;
pub mod external;
pub mod input;
pub mod trip;
