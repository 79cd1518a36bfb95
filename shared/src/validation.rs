//! Validation utilities for MyFish
//!
//! Range checks applied when samples and records are captured, plus the
//! safe-range predicates used for water quality alerting.

use rust_decimal::Decimal;

// ============================================================================
// Capture Validations
// ============================================================================

/// Validate pH is on the 0-14 scale
pub fn validate_ph(ph: Decimal) -> Result<(), &'static str> {
    if ph < Decimal::ZERO || ph > Decimal::from(14) {
        return Err("pH must be between 0 and 14");
    }
    Ok(())
}

/// Validate a water temperature is plausible for a pond (-5 to 45 °C)
pub fn validate_temperature_celsius(temperature: Decimal) -> Result<(), &'static str> {
    if temperature < Decimal::from(-5) || temperature > Decimal::from(45) {
        return Err("Temperature must be between -5 and 45 °C");
    }
    Ok(())
}

/// Validate a concentration measurement (DO, ammonia, nitrite, nitrate,
/// turbidity) is not negative
pub fn validate_concentration(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Concentration cannot be negative");
    }
    Ok(())
}

/// Validate a monetary amount is strictly positive
pub fn validate_positive_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount <= Decimal::ZERO {
        return Err("Amount must be positive");
    }
    Ok(())
}

/// Validate a stock quantity is not negative
pub fn validate_non_negative_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity < Decimal::ZERO {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a pond capacity is strictly positive
pub fn validate_capacity(capacity: Decimal) -> Result<(), &'static str> {
    if capacity <= Decimal::ZERO {
        return Err("Capacity must be positive");
    }
    Ok(())
}

// ============================================================================
// Safe Ranges for Alerting
// ============================================================================

/// Check if pH is in the safe range for warm-water aquaculture (6.5-9.0)
pub fn is_safe_ph(ph: Decimal) -> bool {
    ph >= Decimal::new(65, 1) && ph <= Decimal::from(9)
}

/// Check if dissolved oxygen is above the stress threshold (5 mg/L)
pub fn is_safe_dissolved_oxygen(dissolved_oxygen: Decimal) -> bool {
    dissolved_oxygen >= Decimal::from(5)
}

/// Check if ammonia is below the toxicity threshold (0.5 ppm)
pub fn is_safe_ammonia(ammonia: Decimal) -> bool {
    ammonia <= Decimal::new(5, 1)
}

/// Check if nitrite is below the toxicity threshold (1 ppm)
pub fn is_safe_nitrite(nitrite: Decimal) -> bool {
    nitrite <= Decimal::ONE
}
