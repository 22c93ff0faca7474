//! Impact models

use serde::{Deserialize, Serialize};

use crate::estimation::round2;

/// Share of a surplus that is saved once matched with a buyer
pub const FOOD_SAVED_RATIO: f64 = 0.75;

/// CO2 emissions avoided per ton of food saved (tons)
pub const CO2_PER_TON_SAVED: f64 = 2.5;

/// Share of a surplus turned into compost
pub const COMPOST_RATIO: f64 = 0.15;

/// Average sale price of saved produce (INR/kg)
pub const AVERAGE_PRICE_PER_KG: f64 = 7.0;

const KG_PER_TON: f64 = 1000.0;

/// Environmental and economic impact of selling a surplus instead of wasting it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub total_surplus_tons: f64,
    pub food_saved_tons: f64,
    pub co2_prevented_tons: f64,
    pub compost_generated_tons: f64,
    /// Extra income in rupees, rounded to whole rupees
    pub extra_income_inr: f64,
}

impl ImpactSummary {
    pub fn from_total_surplus(total_surplus_tons: f64) -> Self {
        let food_saved = total_surplus_tons * FOOD_SAVED_RATIO;
        let co2_prevented = food_saved * CO2_PER_TON_SAVED;
        let compost_generated = total_surplus_tons * COMPOST_RATIO;
        let extra_income = food_saved * KG_PER_TON * AVERAGE_PRICE_PER_KG;

        Self {
            total_surplus_tons: round2(total_surplus_tons),
            food_saved_tons: round2(food_saved),
            co2_prevented_tons: round2(co2_prevented),
            compost_generated_tons: round2(compost_generated),
            extra_income_inr: extra_income.round(),
        }
    }
}
