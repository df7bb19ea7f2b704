//! Per-network genesis constants.
//!
//! These are the values every participant of a network agrees on. They are
//! read-only data; [`NetworkPreset`](crate::NetworkPreset) bundles them for
//! lookup by [`NetworkType`](crate::NetworkType).

/// Length in bytes of a beacon root (block root, genesis validators root).
pub const ROOT_LENGTH: usize = 32;

/// Mainnet constants
pub mod mainnet {
    use alloy_primitives::{B256, b256};

    /// Network name
    pub const NETWORK_NAME: &str = "mainnet";

    /// Genesis time (UNIX seconds of slot 0)
    pub const GENESIS_TIME: u64 = 1606824023;

    /// Genesis validators root
    pub const GENESIS_VALIDATORS_ROOT: B256 =
        b256!("4b363db94e286120d76eb905340fdd4e54bfe9f06bf33ff6cf5ad27f511bfe95");

    /// Discovery bootstrap records.
    pub const BOOTSTRAP_ENRS: &[&str] = &[
        "enr:-Ku4QImhMc1z8yCiNJ1TyUxdcfNucje3BGwEHzodEZUan8PherEo4sF7pPHPSIB1NNuSg5fZy7qFsjmUKs2ea1Whi0EBh2F0dG5ldHOIAAAAAAAAAACEZXRoMpD1pf1CAAAAAP__________gmlkgnY0gmlwhBLf22SJc2VjcDI1NmsxoQOVphkDqal4QzPMksc5wnpuC3gvSC8AfbFOnZY_On34wIN1ZHCCIyg",
        "enr:-Le4QPUXJS2BTORXxyx2Ia-9ae4YqA_JWX3ssj4E_J-3z1A-HmFGrU8BpvpqhNabayXeOZ2Nq_sbeDgtzMJpLLnXFgAChGV0aDKQtTA_KgEAAAAAIgEAAAAAAIJpZIJ2NIJpcISsaa0Zg2lwNpAkAIkHAAAAAPA8kv_-awoTiXNlY3AyNTZrMaEDHAD2JKYevx89W0CcFJFiskdcEzkH_Wdv9iW42qLK79ODdWRwgiMohHVkcDaCI4I",
    ];
}

/// Holesky testnet constants
pub mod holesky {
    use alloy_primitives::{B256, b256};

    /// Network name
    pub const NETWORK_NAME: &str = "holesky";

    /// Genesis time (UNIX seconds of slot 0)
    pub const GENESIS_TIME: u64 = 1695902400;

    /// Genesis validators root
    pub const GENESIS_VALIDATORS_ROOT: B256 =
        b256!("9143aa7c615a7f7115e2b6aac319c03529df8242ae705fba9df39b79c59fa8b1");

    /// Discovery bootstrap records. None are bundled for Holesky.
    pub const BOOTSTRAP_ENRS: &[&str] = &[];
}
