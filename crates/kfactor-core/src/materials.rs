// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — Materials
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Typical K-factors for common sheet materials. Descriptive data only,
//! not derived from the curve.

use serde::Serialize;

use kfactor_types::error::{KFactorError, KFactorResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub name: &'static str,
    pub description: &'static str,
    pub typical_k: f64,
}

pub const MATERIALS: [Material; 7] = [
    Material {
        name: "Aluminum 1100",
        description: "Soft aluminum",
        typical_k: 0.33,
    },
    Material {
        name: "Aluminum 6061",
        description: "Medium strength aluminum",
        typical_k: 0.35,
    },
    Material {
        name: "Steel - Mild",
        description: "Low carbon steel",
        typical_k: 0.42,
    },
    Material {
        name: "Steel - Stainless 304",
        description: "Austenitic stainless",
        typical_k: 0.45,
    },
    Material {
        name: "Steel - Spring",
        description: "High carbon steel",
        typical_k: 0.48,
    },
    Material {
        name: "Copper",
        description: "Pure copper",
        typical_k: 0.35,
    },
    Material {
        name: "Brass",
        description: "Copper-zinc alloy",
        typical_k: 0.38,
    },
];

/// Case-insensitive lookup by name.
pub fn find_material(name: &str) -> KFactorResult<&'static Material> {
    let needle = name.trim();
    MATERIALS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(needle))
        .ok_or_else(|| KFactorError::UnknownMaterial(name.to_string()))
}
