use std::borrow::Borrow;

use validator::ValidationError;

use crate::map::{Coordinate, MapError, MAX_ZOOM};

fn field_error(code: &'static str, err: MapError) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(err.to_string().into());
    error
}

pub fn validate_lat(lat: impl Borrow<f64>) -> Result<(), ValidationError> {
    Coordinate::new(*lat.borrow(), 0.0)
        .map(|_| ())
        .map_err(|e| field_error("latitude", e))
}

pub fn validate_lng(lng: impl Borrow<f64>) -> Result<(), ValidationError> {
    Coordinate::new(0.0, *lng.borrow())
        .map(|_| ())
        .map_err(|e| field_error("longitude", e))
}

pub fn validate_zoom(zoom: impl Borrow<u8>) -> Result<(), ValidationError> {
    let zoom = zoom.borrow();
    if *zoom > MAX_ZOOM {
        let mut error = ValidationError::new("zoom");
        error.message = Some(format!("Zoom must be between 0 and {MAX_ZOOM}").into());
        return Err(error);
    }
    Ok(())
}
