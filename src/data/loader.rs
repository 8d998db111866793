use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::Pizza;

const BUILTIN_MENU: &str = include_str!("menu.json");
const BUILTIN_SOURCE: &str = "<built-in menu>";

/// Errors raised while loading or validating menu data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("pizza #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("pizza name `{0}` appears more than once")]
    DuplicateName(String),

    #[error("pizza `{0}` has no photo")]
    MissingPhoto(String),

    #[error("pizza `{0}` has an invalid price")]
    InvalidPrice(String),
}

/// The restaurant's menu. Validated on construction and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    pizzas: Vec<Pizza>,
}

impl Menu {
    pub fn new(pizzas: Vec<Pizza>) -> Result<Self, LoadError> {
        validate(&pizzas)?;
        Ok(Self { pizzas })
    }

    /// A menu with nothing on it yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The house menu compiled into the binary.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::parse(BUILTIN_MENU, Path::new(BUILTIN_SOURCE))
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Self::parse(json, Path::new("<inline>"))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json, path)
    }

    fn parse(json: &str, path: &Path) -> Result<Self, LoadError> {
        let pizzas: Vec<Pizza> = serde_json::from_str(json).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let menu = Self::new(pizzas)?;
        info!(
            source = %path.display(),
            pizzas = menu.len(),
            available = menu.available(),
            "menu loaded"
        );
        Ok(menu)
    }

    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }

    /// Number of pizzas that are not sold out.
    pub fn available(&self) -> usize {
        self.pizzas.iter().filter(|pizza| !pizza.sold_out).count()
    }
}

fn validate(pizzas: &[Pizza]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(pizzas.len());

    for (index, pizza) in pizzas.iter().enumerate() {
        let name = pizza.name.trim();
        if name.is_empty() {
            return Err(LoadError::EmptyName { index });
        }
        if !seen.insert(name) {
            return Err(LoadError::DuplicateName(name.to_string()));
        }
        if pizza.photo_name.trim().is_empty() {
            return Err(LoadError::MissingPhoto(name.to_string()));
        }
        if !valid_price(pizza) {
            return Err(LoadError::InvalidPrice(name.to_string()));
        }
        debug!(name, price = pizza.price, sold_out = pizza.sold_out, "pizza ok");
    }

    Ok(())
}

/// A sold-out pizza may carry a zero price since it is never shown.
fn valid_price(pizza: &Pizza) -> bool {
    let price = pizza.price;
    if !price.is_finite() || price < 0.0 {
        return false;
    }
    pizza.sold_out || price > 0.0
}
