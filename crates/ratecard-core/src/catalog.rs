//! Static Linux VM size and US region tables
//!
//! The RateCard service labels VM meters with the portal ("frontend") size
//! name followed by `" VM"`, while the compute API uses backend size names.
//! [`VmSize`] is the closed set of Linux sizes the report covers and
//! [`Region`] the closed set of US regions; both carry their mappings as
//! constant data.
//!
//! # Examples
//!
//! ```
//! use ratecard_core::catalog::{Region, VmSize};
//!
//! let size = VmSize::from_meter_label("A2 VM").unwrap();
//! assert_eq!(size.backend_name(), "Standard_A2");
//!
//! let region = Region::from_label("US East 2").unwrap();
//! assert_eq!(region.code(), "eastus2");
//! ```

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Suffix the RateCard service appends to VM sub-category labels
pub const METER_LABEL_SUFFIX: &str = " VM";

macro_rules! vm_sizes {
    ($($variant:ident => $frontend:literal, $backend:literal;)+) => {
        /// Linux VM sizes covered by the pricing table
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum VmSize {
            $($variant,)+
        }

        impl VmSize {
            /// Every recognized size, in table order
            pub const ALL: &'static [VmSize] = &[$(VmSize::$variant,)+];

            /// Portal size name, as used in meter labels
            pub fn frontend_name(self) -> &'static str {
                match self {
                    $(VmSize::$variant => $frontend,)+
                }
            }

            /// Compute API size name
            pub fn backend_name(self) -> &'static str {
                match self {
                    $(VmSize::$variant => $backend,)+
                }
            }
        }
    };
}

vm_sizes! {
    BasicA0 => "BASIC.A0", "Basic_A0";
    BasicA1 => "BASIC.A1", "Basic_A1";
    BasicA2 => "BASIC.A2", "Basic_A2";
    BasicA3 => "BASIC.A3", "Basic_A3";
    BasicA4 => "BASIC.A4", "Basic_A4";
    A0 => "A0", "Standard_A0";
    A1 => "A1", "Standard_A1";
    A2 => "A2", "Standard_A2";
    A3 => "A3", "Standard_A3";
    A4 => "A4", "Standard_A4";
    A5 => "A5", "Standard_A5";
    A6 => "A6", "Standard_A6";
    A7 => "A7", "Standard_A7";
    A8 => "A8", "Standard_A8";
    A9 => "A9", "Standard_A9";
    D1 => "Standard_D1", "Standard_D1";
    D2 => "Standard_D2", "Standard_D2";
    D3 => "Standard_D3", "Standard_D3";
    D4 => "Standard_D4", "Standard_D4";
    D11 => "Standard_D11", "Standard_D11";
    D12 => "Standard_D12", "Standard_D12";
    D13 => "Standard_D13", "Standard_D13";
    D14 => "Standard_D14", "Standard_D14";
    D1V2 => "Standard_D1_v2", "Standard_D1_v2";
    D2V2 => "Standard_D2_v2", "Standard_D2_v2";
    D3V2 => "Standard_D3_v2", "Standard_D3_v2";
    D4V2 => "Standard_D4_v2", "Standard_D4_v2";
    D5V2 => "Standard_D5_v2", "Standard_D5_v2";
    D11V2 => "Standard_D11_v2", "Standard_D11_v2";
    D12V2 => "Standard_D12_v2", "Standard_D12_v2";
    D13V2 => "Standard_D13_v2", "Standard_D13_v2";
    D14V2 => "Standard_D14_v2", "Standard_D14_v2";
    D15V2 => "Standard_D15_v2", "Standard_D15_v2";
    Ds1 => "Standard_DS1", "Standard_DS1";
    Ds2 => "Standard_DS2", "Standard_DS2";
    Ds3 => "Standard_DS3", "Standard_DS3";
    Ds4 => "Standard_DS4", "Standard_DS4";
    Ds11 => "Standard_DS11", "Standard_DS11";
    Ds12 => "Standard_DS12", "Standard_DS12";
    Ds13 => "Standard_DS13", "Standard_DS13";
    Ds14 => "Standard_DS14", "Standard_DS14";
    G1 => "Standard_G1", "Standard_G1";
    G2 => "Standard_G2", "Standard_G2";
    G3 => "Standard_G3", "Standard_G3";
    G4 => "Standard_G4", "Standard_G4";
    G5 => "Standard_G5", "Standard_G5";
    Gs1 => "Standard_GS1", "Standard_GS1";
    Gs2 => "Standard_GS2", "Standard_GS2";
    Gs3 => "Standard_GS3", "Standard_GS3";
    Gs4 => "Standard_GS4", "Standard_GS4";
    Gs5 => "Standard_GS5", "Standard_GS5";
    F1 => "Standard_F1", "Standard_F1";
    F2 => "Standard_F2", "Standard_F2";
    F4 => "Standard_F4", "Standard_F4";
    F8 => "Standard_F8", "Standard_F8";
    F16 => "Standard_F16", "Standard_F16";
}

static METER_LABELS: Lazy<HashMap<String, VmSize>> = Lazy::new(|| {
    VmSize::ALL
        .iter()
        .map(|size| (size.meter_label(), *size))
        .collect()
});

impl VmSize {
    /// Sub-category label the RateCard service uses for this size
    pub fn meter_label(self) -> String {
        format!("{}{}", self.frontend_name(), METER_LABEL_SUFFIX)
    }

    /// Resolve a meter sub-category label such as `"Standard_D2 VM"`
    pub fn from_meter_label(label: &str) -> Option<Self> {
        METER_LABELS.get(label).copied()
    }
}

impl fmt::Display for VmSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.backend_name())
    }
}

/// US regions covered by the pricing table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    UsEast,
    UsEast2,
    UsWest,
    UsCentral,
    UsNorthCentral,
    UsSouthCentral,
    UsWest2,
    UsWestCentral,
}

impl Region {
    pub const ALL: &'static [Region] = &[
        Region::UsEast,
        Region::UsEast2,
        Region::UsWest,
        Region::UsCentral,
        Region::UsNorthCentral,
        Region::UsSouthCentral,
        Region::UsWest2,
        Region::UsWestCentral,
    ];

    /// Region label used by the RateCard service
    pub fn label(self) -> &'static str {
        match self {
            Region::UsEast => "US East",
            Region::UsEast2 => "US East 2",
            Region::UsWest => "US West",
            Region::UsCentral => "US Central",
            Region::UsNorthCentral => "US North Central",
            Region::UsSouthCentral => "US South Central",
            Region::UsWest2 => "US West 2",
            Region::UsWestCentral => "US West Central",
        }
    }

    /// Region code used by the compute API
    pub fn code(self) -> &'static str {
        match self {
            Region::UsEast => "eastus",
            Region::UsEast2 => "eastus2",
            Region::UsWest => "westus",
            Region::UsCentral => "centralus",
            Region::UsNorthCentral => "northcentralus",
            Region::UsSouthCentral => "southcentralus",
            Region::UsWest2 => "westus2",
            Region::UsWestCentral => "westcentralus",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|region| region.label() == label)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_size_table_is_complete() {
        assert_eq!(VmSize::ALL.len(), 56);

        let labels: HashSet<_> = VmSize::ALL.iter().map(|s| s.meter_label()).collect();
        assert_eq!(labels.len(), VmSize::ALL.len());
    }

    #[test]
    fn test_meter_label_lookup() {
        assert_eq!(VmSize::from_meter_label("BASIC.A0 VM"), Some(VmSize::BasicA0));
        assert_eq!(
            VmSize::from_meter_label("Standard_D11_v2 VM"),
            Some(VmSize::D11V2)
        );
        assert_eq!(VmSize::BasicA0.backend_name(), "Basic_A0");
        assert_eq!(VmSize::A7.backend_name(), "Standard_A7");
    }

    #[test]
    fn test_meter_label_requires_suffix() {
        assert_eq!(VmSize::from_meter_label("Standard_D2"), None);
        assert_eq!(VmSize::from_meter_label("Standard_D2 VM (Windows)"), None);
        assert_eq!(VmSize::from_meter_label("standard_d2 vm"), None);
        assert_eq!(VmSize::from_meter_label(""), None);
    }

    #[test]
    fn test_region_mapping() {
        assert_eq!(Region::ALL.len(), 8);
        assert_eq!(Region::from_label("US West Central"), Some(Region::UsWestCentral));
        assert_eq!(Region::from_label("EU West"), None);
        assert_eq!(Region::UsSouthCentral.code(), "southcentralus");

        for region in Region::ALL {
            assert_eq!(Region::from_label(region.label()), Some(*region));
        }
    }
}
