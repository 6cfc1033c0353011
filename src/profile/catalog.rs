// src/profile/catalog.rs

/// One known HR credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub provider: &'static str,
    pub kind: &'static str,
}

const fn entry(code: &'static str, provider: &'static str, kind: &'static str) -> CatalogEntry {
    CatalogEntry { code, provider, kind }
}

/// Credential catalog. Order is stable; filters list codes in this order.
pub static CATALOG: &[CatalogEntry] = &[
    entry("SHRM-CP", "SHRM", "HR Management"),
    entry("SHRM-SCP", "SHRM", "HR Management"),
    entry("PHR", "HRCI", "HR Professional"),
    entry("SPHR", "HRCI", "Senior HR Professional"),
    entry("GPHR", "HRCI", "Global HR Professional"),
    entry("SHRM-AP", "SHRM", "Asia Pacific HR"),
    entry("CHRP", "HRPA", "Chartered HR Professional"),
    entry("CHRL", "HRPA", "Chartered HR Leader"),
    entry("CHRE", "HRPA", "Chartered HR Executive"),
    entry("CCP", "WorldatWork", "Compensation Professional"),
    entry("CBP", "WorldatWork", "Benefits Professional"),
    entry("GRP", "WorldatWork", "Global Remuneration Professional"),
];

/// Exact, case-sensitive code lookup.
pub fn lookup(code: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.code == code)
}

pub fn codes() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|e| e.code)
}
