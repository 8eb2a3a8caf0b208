//! Fee schedules keyed by class or category code.
//!
//! Each table is immutable process-wide data. Keys match exactly after trimming the input; there
//! is no default row.

use serde::Serialize;

/// Radio Operator Certificate coefficients for one certificate class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocRow {
    /// Certificate fee per year of validity.
    pub rate: f64,
    /// Documentary stamp tax.
    pub tax: f64,
    pub filing_fee: Option<f64>,
    /// Auxiliary (examination/processing) fee charged with operator-licence applications.
    pub aux_fee: Option<f64>,
    pub seminar_fee: Option<f64>,
    pub modification_fee: Option<f64>,
}

/// Amateur schedule for one licence class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmateurRow {
    pub filing_fee: f64,
    pub license_fee: f64,
    pub surcharge: f64,
    pub tax: f64,
    pub modification_fee: f64,
    pub construction_permit_fee: f64,
    pub permit_fee: f64,
    pub purchase_fee: f64,
    pub possession_fee: f64,
}

/// Ship station coefficients for one ship category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShipRow {
    /// Permit to purchase, per unit of equipment.
    pub purchase_fee: f64,
    /// Permit to possess, per unit of equipment.
    pub possession_fee: f64,
    pub construction_permit_fee: f64,
    /// Station licence, per year.
    pub license_fee: f64,
    /// Inspection, per year.
    pub inspection_fee: f64,
    pub modification_fee: f64,
    pub filing_fee: f64,
    pub tax: f64,
    /// Late-renewal surcharge within six months of expiry.
    pub surcharge_half: f64,
    /// Late-renewal surcharge beyond six months.
    pub surcharge_full: f64,
    /// Certificates covered by one deletion filing; treated as 1 when absent.
    pub certificate_multiplier: Option<f64>,
}

const fn roc(rate: f64) -> RocRow {
    RocRow {
        rate,
        tax: 30.0,
        filing_fee: None,
        aux_fee: None,
        seminar_fee: None,
        modification_fee: None,
    }
}

const fn commercial_roc(rate: f64) -> RocRow {
    RocRow {
        modification_fee: Some(120.0),
        ..roc(rate)
    }
}

pub static ROC_TABLE: &[(&str, RocRow)] = &[
    ("RTG 1st", commercial_roc(180.0)),
    ("RTG 2nd", commercial_roc(120.0)),
    ("RTG 3rd", commercial_roc(60.0)),
    ("PHN 1st", commercial_roc(120.0)),
    ("PHN 2nd", commercial_roc(100.0)),
    ("PHN 3rd", commercial_roc(60.0)),
    ("RROC- AIRCRAFT", roc(100.0)),
    (
        "SROP",
        RocRow {
            filing_fee: Some(20.0),
            aux_fee: Some(20.0),
            seminar_fee: Some(60.0),
            ..roc(60.0)
        },
    ),
    (
        "GROC",
        RocRow {
            filing_fee: Some(20.0),
            aux_fee: Some(20.0),
            ..roc(60.0)
        },
    ),
    (
        "RROC-RLM",
        RocRow {
            filing_fee: Some(20.0),
            ..roc(60.0)
        },
    ),
];

pub static AMATEUR_TABLE: &[(&str, AmateurRow)] = &[
    (
        "CLASS A",
        AmateurRow {
            filing_fee: 60.0,
            license_fee: 120.0,
            surcharge: 60.0,
            tax: 30.0,
            modification_fee: 50.0,
            construction_permit_fee: 0.0,
            permit_fee: 1000.0,
            purchase_fee: 50.0,
            possession_fee: 50.0,
        },
    ),
    (
        "CLASS B",
        AmateurRow {
            filing_fee: 60.0,
            license_fee: 132.0,
            surcharge: 66.0,
            tax: 30.0,
            modification_fee: 50.0,
            construction_permit_fee: 0.0,
            permit_fee: 1000.0,
            purchase_fee: 50.0,
            possession_fee: 50.0,
        },
    ),
    (
        "CLASS C",
        AmateurRow {
            filing_fee: 60.0,
            license_fee: 144.0,
            surcharge: 72.0,
            tax: 30.0,
            modification_fee: 50.0,
            construction_permit_fee: 0.0,
            permit_fee: 1000.0,
            purchase_fee: 50.0,
            possession_fee: 50.0,
        },
    ),
    (
        "CLASS D",
        AmateurRow {
            filing_fee: 60.0,
            license_fee: 60.0,
            surcharge: 30.0,
            tax: 30.0,
            modification_fee: 50.0,
            construction_permit_fee: 0.0,
            permit_fee: 1000.0,
            purchase_fee: 50.0,
            possession_fee: 50.0,
        },
    ),
    (
        "CLUB",
        AmateurRow {
            filing_fee: 180.0,
            license_fee: 600.0,
            surcharge: 300.0,
            tax: 30.0,
            modification_fee: 180.0,
            construction_permit_fee: 600.0,
            permit_fee: 1000.0,
            purchase_fee: 96.0,
            possession_fee: 96.0,
        },
    ),
];

pub static SHIP_TABLE: &[(&str, ShipRow)] = &[
    (
        "SHIP-DOM-SMALL",
        ShipRow {
            purchase_fee: 50.0,
            possession_fee: 50.0,
            construction_permit_fee: 360.0,
            license_fee: 720.0,
            inspection_fee: 720.0,
            modification_fee: 180.0,
            filing_fee: 180.0,
            tax: 30.0,
            surcharge_half: 360.0,
            surcharge_full: 720.0,
            certificate_multiplier: None,
        },
    ),
    (
        "SHIP-DOM-LARGE",
        ShipRow {
            purchase_fee: 96.0,
            possession_fee: 96.0,
            construction_permit_fee: 720.0,
            license_fee: 1200.0,
            inspection_fee: 1200.0,
            modification_fee: 360.0,
            filing_fee: 180.0,
            tax: 30.0,
            surcharge_half: 600.0,
            surcharge_full: 1200.0,
            certificate_multiplier: None,
        },
    ),
    (
        "SHIP-INTL",
        ShipRow {
            purchase_fee: 120.0,
            possession_fee: 120.0,
            construction_permit_fee: 1440.0,
            license_fee: 2400.0,
            inspection_fee: 1440.0,
            modification_fee: 360.0,
            filing_fee: 180.0,
            tax: 30.0,
            surcharge_half: 1200.0,
            surcharge_full: 2400.0,
            certificate_multiplier: Some(200.0),
        },
    ),
    (
        "SHIP-FISHING",
        ShipRow {
            purchase_fee: 50.0,
            possession_fee: 50.0,
            construction_permit_fee: 240.0,
            license_fee: 480.0,
            inspection_fee: 480.0,
            modification_fee: 120.0,
            filing_fee: 120.0,
            tax: 30.0,
            surcharge_half: 240.0,
            surcharge_full: 480.0,
            certificate_multiplier: None,
        },
    ),
    (
        "SHIP-PLEASURE",
        ShipRow {
            purchase_fee: 50.0,
            possession_fee: 50.0,
            construction_permit_fee: 300.0,
            license_fee: 600.0,
            inspection_fee: 600.0,
            modification_fee: 120.0,
            filing_fee: 180.0,
            tax: 30.0,
            surcharge_half: 300.0,
            surcharge_full: 600.0,
            certificate_multiplier: Some(1.0),
        },
    ),
];

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    let key = key.trim();
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, row)| *row)
}

pub fn roc_row(class: &str) -> Option<RocRow> {
    lookup(ROC_TABLE, class)
}

pub fn amateur_row(class: &str) -> Option<AmateurRow> {
    lookup(AMATEUR_TABLE, class)
}

pub fn ship_row(category: &str) -> Option<ShipRow> {
    lookup(SHIP_TABLE, category)
}
