//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` so
//! agent IDs can index their owning `Vec` directly via `.index()`.
//!
//! Each ID type carries a short display prefix (`F`, `D`, `C`) so log and CSV
//! output reads `F3`, `D0`, `C17`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) = $prefix:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Display prefix used in logs and CSV output.
            pub const PREFIX: &'static str = $prefix;

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a firefighter in the simulation's firefighter list.
    pub struct FirefighterId(u32) = "F";
}

typed_id! {
    /// Index of a drone in the simulation's drone list.
    pub struct DroneId(u32) = "D";
}

typed_id! {
    /// Unique contract identifier, allocated from a per-run monotonic counter.
    /// Two clusters sharing a representative cell in the same tick still get
    /// distinct IDs.
    pub struct ContractId(u32) = "C";
}
