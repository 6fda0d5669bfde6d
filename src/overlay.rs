use crate::catalog::{rating_stars, short_location, Destination};
use web_sys as web;

const OVERLAY_ID: &str = "detail-overlay";

fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Fill the detail overlay with `dest` and make it visible.
pub fn show(document: &web::Document, dest: &Destination) {
    set_text(document, "detail-name", &dest.name);
    set_text(document, "detail-location", &dest.location);
    set_text(document, "detail-price", &dest.price);
    set_text(document, "detail-rating", &rating_stars(dest.rating));
    set_text(
        document,
        "detail-blurb",
        &format!(
            "Nestled in the heart of {}, this iconic destination defines the pinnacle of luxury.",
            short_location(&dest.location)
        ),
    );
    if let Some(img) = document.get_element_by_id("detail-image") {
        let _ = img.set_attribute("src", &dest.image);
        let _ = img.set_attribute("alt", &dest.name);
    }
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let _ = el.class_list().remove_1("hidden");
        // fallback for pages without the CSS class
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        let _ = el.class_list().add_1("hidden");
        let _ = el.set_attribute("style", "display:none");
    }
}
