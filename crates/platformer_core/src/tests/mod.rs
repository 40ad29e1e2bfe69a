//! Whole-frame scenarios run through [`crate::Simulation`]
