/// Possible errors
///
/// The cost computation itself never fails; these cover configuration,
/// input parsing and the outer surfaces (CSV, HTTP, environment).

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("invalid network: {0}")]
    Network(String),

    #[error("unknown product code '{0}'")]
    UnknownProduct(String),

    #[error("negative quantity {quantity} for product {product}")]
    NegativeQuantity { product: String, quantity: i64 },

    #[error("invalid order entry '{0}'")]
    OrderSyntax(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = core::result::Result<T, Error>;
