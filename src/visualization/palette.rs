//! Charge -> display colour

/// Brightness added per unit of elementary charge
const INTENSITY_PER_CHARGE: f64 = 60.0;

/// RGB for a particle: red for positive, blue for negative, black for neutral.
/// Brightness grows with |charge| and saturates at 255.
pub fn charge_color(charge: f64) -> [u8; 3] {
    let level = (charge.abs() * INTENSITY_PER_CHARGE).min(255.0) as u8;
    if charge > 0.0 {
        [level, 0, 0]
    } else {
        [0, 0, level]
    }
}
