pub mod bishop;
pub mod cardiac_surgery_risk;
pub mod cha2ds2_vasc;
pub mod cockcroft_gault;
pub mod grace;
pub mod meld;
pub mod neuro_disability;
pub mod wells_pe;
