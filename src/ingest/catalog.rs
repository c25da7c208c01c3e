//! Catalog of analytic functions available for sampling.
//!
//! Names resolve through [`CATALOG`], a read-only table built once per
//! process. Both the bare name (`"sin"`) and the call form (`"sin(x)"`)
//! are accepted.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::ingest::errors::IngestError;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CatalogFn {
    Sin,
    Cos,
    Exp,
}

pub static CATALOG: Lazy<HashMap<&'static str, CatalogFn>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for f in CatalogFn::ALL {
        m.insert(f.name(), f);
        m.insert(f.call_form(), f);
    }
    m
});

impl CatalogFn {
    pub const ALL: [CatalogFn; 3] = [CatalogFn::Sin, CatalogFn::Cos, CatalogFn::Exp];

    pub const fn name(self) -> &'static str {
        match self {
            CatalogFn::Sin => "sin",
            CatalogFn::Cos => "cos",
            CatalogFn::Exp => "exp",
        }
    }

    pub const fn call_form(self) -> &'static str {
        match self {
            CatalogFn::Sin => "sin(x)",
            CatalogFn::Cos => "cos(x)",
            CatalogFn::Exp => "exp(x)",
        }
    }

    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            CatalogFn::Sin => x.sin(),
            CatalogFn::Cos => x.cos(),
            CatalogFn::Exp => x.exp(),
        }
    }

    pub fn lookup(name: &str) -> Result<Self, IngestError> {
        let key = name.trim().to_ascii_lowercase();
        CATALOG.get(key.as_str()).copied().ok_or_else(|| IngestError::UnknownFunction {
            name: name.to_string(),
            expected: CatalogFn::ALL.map(CatalogFn::name).join(", "),
        })
    }
}

impl FromStr for CatalogFn {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogFn::lookup(s)
    }
}

impl std::fmt::Display for CatalogFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.call_form())
    }
}
