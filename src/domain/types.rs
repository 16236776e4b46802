use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the nine stocked product codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Product {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

impl Product {
    pub const ALL: [Product; 9] = [
        Product::A,
        Product::B,
        Product::C,
        Product::D,
        Product::E,
        Product::F,
        Product::G,
        Product::H,
        Product::I,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            Product::A => "A",
            Product::B => "B",
            Product::C => "C",
            Product::D => "D",
            Product::E => "E",
            Product::F => "F",
            Product::G => "G",
            Product::H => "H",
            Product::I => "I",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Product {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Product::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnknownProduct(code.to_string()))
    }
}

/// A warehouse. `ALL` is the fixed enumeration order every plan follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Center {
    C1,
    C2,
    C3,
}

impl Center {
    pub const ALL: [Center; 3] = [Center::C1, Center::C2, Center::C3];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Center::C1 => "C1",
            Center::C2 => "C2",
            Center::C3 => "C3",
        };
        f.write_str(name)
    }
}

/// A location in the road graph: a center or the single destination `L1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Center(Center),
    Destination,
}

impl From<Center> for Node {
    fn from(center: Center) -> Self {
        Node::Center(center)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Center(center) => center.fmt(f),
            Node::Destination => f.write_str("L1"),
        }
    }
}

/// Requested quantity per product. Zero means "not requested".
///
/// Quantities are not validated on construction; negative values are kept
/// and simply never planned. Use [`Order::validate`] for strict input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OrderFields", into = "OrderFields")]
pub struct Order {
    quantities: [i64; 9],
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, product: Product, quantity: i64) -> Self {
        self.set(product, quantity);
        self
    }

    pub fn set(&mut self, product: Product, quantity: i64) {
        self.quantities[product.index()] = quantity;
    }

    pub fn quantity(&self, product: Product) -> i64 {
        self.quantities[product.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Product, i64)> + '_ {
        Product::ALL.into_iter().map(|p| (p, self.quantity(p)))
    }

    /// Units that will actually be planned (positive quantities only).
    pub fn requested_units(&self) -> i64 {
        self.quantities
            .iter()
            .filter(|q| **q > 0)
            .fold(0i64, |total, q| total.saturating_add(*q))
    }

    pub fn validate(&self) -> Result<()> {
        match self.iter().find(|(_, q)| *q < 0) {
            Some((product, quantity)) => Err(Error::NegativeQuantity {
                product: product.to_string(),
                quantity,
            }),
            None => Ok(()),
        }
    }
}

impl FromStr for Order {
    type Err = Error;

    /// Parse `A=1,G=2`. Repeated products accumulate; an empty string is an
    /// empty order.
    fn from_str(s: &str) -> Result<Self> {
        let mut order = Order::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (code, quantity) = entry
                .split_once('=')
                .ok_or_else(|| Error::OrderSyntax(entry.to_string()))?;
            let product: Product = code.parse()?;
            let quantity: i64 = quantity
                .trim()
                .parse()
                .map_err(|_| Error::OrderSyntax(entry.to_string()))?;
            let total = order
                .quantity(product)
                .checked_add(quantity)
                .ok_or_else(|| Error::OrderSyntax(entry.to_string()))?;
            order.set(product, total);
        }
        Ok(order)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .filter(|(_, q)| *q != 0)
            .map(|(p, q)| format!("{p}={q}"))
            .collect();
        f.write_str(&entries.join(","))
    }
}

/// Wire shape of an order: nine named fields, each defaulting to zero.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
struct OrderFields {
    #[serde(rename = "A")]
    a: i64,
    #[serde(rename = "B")]
    b: i64,
    #[serde(rename = "C")]
    c: i64,
    #[serde(rename = "D")]
    d: i64,
    #[serde(rename = "E")]
    e: i64,
    #[serde(rename = "F")]
    f: i64,
    #[serde(rename = "G")]
    g: i64,
    #[serde(rename = "H")]
    h: i64,
    #[serde(rename = "I")]
    i: i64,
}

impl From<OrderFields> for Order {
    fn from(o: OrderFields) -> Self {
        Order {
            quantities: [o.a, o.b, o.c, o.d, o.e, o.f, o.g, o.h, o.i],
        }
    }
}

impl From<Order> for OrderFields {
    fn from(order: Order) -> Self {
        let [a, b, c, d, e, f, g, h, i] = order.quantities;
        OrderFields {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
        }
    }
}

/// One pickup obligation: a center and how many units of each product to
/// collect there.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub center: Center,
    pub loads: Vec<(Product, u64)>,
}

impl Stop {
    /// One entry per unit, lazily.
    pub fn units(&self) -> impl Iterator<Item = Product> + '_ {
        self.loads
            .iter()
            .flat_map(|(product, count)| std::iter::repeat(*product).take(*count as usize))
    }

    pub fn unit_count(&self) -> u64 {
        self.loads
            .iter()
            .fold(0u64, |total, (_, count)| total.saturating_add(*count))
    }
}

/// Pickup obligations in center enumeration order; centers with nothing to
/// collect are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPlan {
    pub stops: Vec<Stop>,
}

impl TripPlan {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn centers(&self) -> impl Iterator<Item = Center> + '_ {
        self.stops.iter().map(|s| s.center)
    }

    pub fn stop(&self, center: Center) -> Option<&Stop> {
        self.stops.iter().find(|s| s.center == center)
    }
}
