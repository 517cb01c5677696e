// Mean radius of Earth in kilometers, spherical model
pub(crate) const EARTH_RADIUS_KM: f64 = 6371.0;

// Nudge applied after scaling into field units so exact cell edges land in
// the upper cell.
pub(crate) const EDGE_NUDGE: f64 = 0.000_000_1;

pub(crate) const MAX_LOCATOR_LEN: usize = 2 * TIERS.len();

/// Characters used by a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Symbol {
    Upper,
    Digit,
    Lower,
}

impl Symbol {
    fn base(self) -> u8 {
        match self {
            Symbol::Upper => b'A',
            Symbol::Digit => b'0',
            Symbol::Lower => b'a',
        }
    }

    /// Character for `index`, which must be below the tier radix.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn encode(self, index: u32) -> char {
        char::from(self.base() + index as u8)
    }

    /// Index of `byte` in this alphabet, limited to `radix` entries. Letters
    /// match either case unless `strict`.
    pub(crate) fn decode(self, byte: u8, radix: u32, strict: bool) -> Option<u32> {
        let (byte, base) = match self {
            Symbol::Digit => (byte, self.base()),
            _ if strict => (byte, self.base()),
            _ => (byte.to_ascii_lowercase(), b'a'),
        };

        byte
            .checked_sub(base)
            .map(u32::from)
            .filter(|index| *index < radix)
    }
}

/// One two-character group of a locator: a longitude symbol followed by a
/// latitude symbol, each selecting one of `radix` cells.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Tier {
    pub index: usize,
    pub symbol: Symbol,
    pub radix: u32,
    /// Degrees of longitude per unit
    pub lon_unit: f64,
    /// Degrees of latitude per unit
    pub lat_unit: f64,
}

impl Tier {
    /// Unit for the longitude (`0`) or latitude (`1`) slot.
    pub(crate) fn unit(&self, slot: usize) -> f64 {
        if slot == 0 { self.lon_unit } else { self.lat_unit }
    }
}

pub(crate) const TIERS: [Tier; 5] = [
    Tier { index: 0, symbol: Symbol::Upper, radix: 18, lon_unit: 20.0, lat_unit: 10.0 },
    Tier { index: 1, symbol: Symbol::Digit, radix: 10, lon_unit: 20.0 / 10.0, lat_unit: 10.0 / 10.0 },
    Tier {
        index: 2,
        symbol: Symbol::Upper,
        radix: 24,
        lon_unit: 20.0 / (10.0 * 24.0),
        lat_unit: 10.0 / (10.0 * 24.0),
    },
    Tier {
        index: 3,
        symbol: Symbol::Digit,
        radix: 10,
        lon_unit: 20.0 / (10.0 * 24.0 * 10.0),
        lat_unit: 10.0 / (10.0 * 24.0 * 10.0),
    },
    Tier {
        index: 4,
        symbol: Symbol::Lower,
        radix: 24,
        lon_unit: 20.0 / (10.0 * 24.0 * 10.0 * 24.0),
        lat_unit: 10.0 / (10.0 * 24.0 * 10.0 * 24.0),
    },
];
