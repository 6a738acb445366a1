// ─────────────────────────────────────────────────────────────────────
// K-Factor Calculator — K-Factor Cache
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bounded read-through memo for the K-factor curve.
//!
//! Entries are immutable once inserted and never evicted. When the cache is
//! full, new ratios are evaluated directly and not stored.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::curve::KFactorCurve;

/// Memo of `curve.evaluate`, keyed by the ratio's bit pattern.
#[derive(Debug)]
pub struct KFactorCache {
    curve: KFactorCurve,
    capacity: usize,
    entries: RwLock<HashMap<u64, f64>>,
}

impl KFactorCache {
    pub fn new(curve: KFactorCurve, capacity: usize) -> Self {
        KFactorCache {
            curve,
            capacity,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn curve(&self) -> &KFactorCurve {
        &self.curve
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut map) = self.entries.write() {
            map.clear();
        }
    }

    /// Cached K for `ratio`, computing and storing it on a miss.
    ///
    /// A poisoned lock degrades to direct evaluation.
    pub fn get_or_compute(&self, ratio: f64) -> f64 {
        if self.capacity == 0 {
            return self.curve.evaluate(ratio);
        }
        // -0.0 and 0.0 share an entry
        let key = (ratio + 0.0).to_bits();

        if let Ok(map) = self.entries.read() {
            if let Some(&k) = map.get(&key) {
                return k;
            }
        }

        let k = self.curve.evaluate(ratio);
        if let Ok(mut map) = self.entries.write() {
            if map.len() < self.capacity {
                map.entry(key).or_insert(k);
            }
        }
        k
    }
}
