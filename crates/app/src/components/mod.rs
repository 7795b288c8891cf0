mod trip_search_form;

pub use trip_search_form::TripSearchForm;
