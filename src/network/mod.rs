pub mod model;
pub mod tariff;

pub use model::NetworkModel;
pub use tariff::cost_rate_per_km;
