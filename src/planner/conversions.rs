use crate::planner::constants::{CM_PER_INCH, INCHES_PER_FOOT, KG_PER_LB};

#[inline]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

#[inline]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Total inches for a height given as feet plus inches.
#[inline]
pub fn feet_inches_to_inches(feet: f64, inches: f64) -> f64 {
    feet * INCHES_PER_FOOT + inches
}

#[inline]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    inches_to_cm(feet_inches_to_inches(feet, inches))
}
