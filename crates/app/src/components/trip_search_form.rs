use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlane;
use dioxus_free_icons::Icon;
use shared_types::{PassengerCount, SearchQuery, TripType, ALL_TRIP_TYPES};
use shared_ui::components::{FieldRow, Form, SelectField, SelectOption, SubmitButton, TextField};

use crate::submission;

/// Local state of the trip search form: one signal per control.
#[derive(Clone, Copy, PartialEq)]
pub struct TripSearchState {
    pub departure: Signal<String>,
    pub arrival: Signal<String>,
    pub date: Signal<String>,
    pub passengers: Signal<PassengerCount>,
    pub trip_type: Signal<TripType>,
}

/// Create the form state for the current component, initialised once per
/// mount with the empty-form defaults.
pub fn use_trip_search_state() -> TripSearchState {
    TripSearchState {
        departure: use_signal(String::new),
        arrival: use_signal(String::new),
        date: use_signal(String::new),
        passengers: use_signal(PassengerCount::default),
        trip_type: use_signal(TripType::default),
    }
}

impl TripSearchState {
    pub fn set_departure(&mut self, text: String) {
        self.departure.set(text);
    }

    pub fn set_arrival(&mut self, text: String) {
        self.arrival.set(text);
    }

    pub fn set_date(&mut self, value: String) {
        self.date.set(value);
    }

    /// Raw text from the numeric control; unparseable input becomes `NaN`.
    pub fn set_passengers(&mut self, raw: &str) {
        self.passengers.set(PassengerCount::parse(raw));
    }

    /// Unknown option values leave the current trip type in place.
    pub fn set_trip_type(&mut self, value: &str) {
        if let Some(selected) = TripType::from_value(value) {
            self.trip_type.set(selected);
        }
    }

    pub fn snapshot(&self) -> SearchQuery {
        SearchQuery {
            departure: self.departure.read().clone(),
            arrival: self.arrival.read().clone(),
            date: self.date.read().clone(),
            passengers: *self.passengers.read(),
            trip_type: *self.trip_type.read(),
        }
    }

    /// Report the current values and pass them to `on_search`, if any.
    pub fn submit(&self, on_search: Option<EventHandler<SearchQuery>>) -> SearchQuery {
        let query = self.snapshot();
        submission::report(&query);
        if let Some(handler) = on_search {
            handler.call(query.clone());
        }
        query
    }
}

/// Trip search form: departure, arrival, date, passenger count and trip type.
///
/// Submitting never navigates; the current values are reported as one log
/// event and, when given, passed to `on_search`.
#[component]
pub fn TripSearchForm(#[props(default)] on_search: Option<EventHandler<SearchQuery>>) -> Element {
    let state = use_trip_search_state();

    rsx! {
        TripSearchFields { state, on_search }
    }
}

/// The controls of [`TripSearchForm`], bound to an existing state.
#[component]
pub fn TripSearchFields(
    state: TripSearchState,
    #[props(default)] on_search: Option<EventHandler<SearchQuery>>,
) -> Element {
    let mut state = state;
    let trip_options: Vec<SelectOption> = ALL_TRIP_TYPES
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.display_name()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./trip_search_form.css") }
        Form {
            class: "input-form",
            onsubmit: move |_evt: FormEvent| {
                state.submit(on_search);
            },
            FieldRow {
                TextField {
                    name: "departure",
                    placeholder: "Departing from?",
                    value: state.departure.read().clone(),
                    on_input: move |evt: FormEvent| state.set_departure(evt.value()),
                }
                TextField {
                    name: "arrival",
                    placeholder: "Where to?",
                    value: state.arrival.read().clone(),
                    on_input: move |evt: FormEvent| state.set_arrival(evt.value()),
                }
                TextField {
                    name: "date",
                    input_type: "date",
                    value: state.date.read().clone(),
                    on_input: move |evt: FormEvent| state.set_date(evt.value()),
                }
                TextField {
                    name: "passengers",
                    input_type: "number",
                    placeholder: "Passengers",
                    value: state.passengers.read().to_string(),
                    on_input: move |evt: FormEvent| state.set_passengers(&evt.value()),
                }
                SelectField {
                    name: "trip-type",
                    value: state.trip_type.read().as_str().to_string(),
                    options: trip_options,
                    onchange: move |evt: FormEvent| state.set_trip_type(&evt.value()),
                }
                SubmitButton { title: "Search flights",
                    Icon::<LdPlane> { icon: LdPlane, width: 18, height: 18 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Input steps applied to the form state before it is submitted.
    type Script = fn(&mut TripSearchState);

    #[derive(Clone)]
    struct SessionProps {
        script: Script,
        submitted: Rc<RefCell<Vec<SearchQuery>>>,
    }

    /// Apply `script` through the form's handlers, submit once with an
    /// `on_search` that records the query, then render the bound controls.
    fn session(props: SessionProps) -> Element {
        let mut state = use_trip_search_state();
        let script = props.script;
        let submitted = props.submitted.clone();
        use_hook(move || {
            script(&mut state);
            let on_search = EventHandler::new(move |query: SearchQuery| {
                submitted.borrow_mut().push(query);
            });
            state.submit(Some(on_search));
        });

        rsx! {
            TripSearchFields { state }
        }
    }

    /// Run a session; returns the rendered HTML and every query passed to `on_search`.
    fn run(script: Script) -> (String, Vec<SearchQuery>) {
        let submitted = Rc::new(RefCell::new(Vec::new()));
        let mut dom = VirtualDom::new_with_props(
            session,
            SessionProps {
                script,
                submitted: submitted.clone(),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        let queries = submitted.borrow().clone();
        (html, queries)
    }

    fn render_fresh_form() -> String {
        #[component]
        fn Harness() -> Element {
            rsx! { TripSearchForm {} }
        }

        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// The opening tag of the first `<input>` with the given name.
    fn input_tag<'a>(html: &'a str, name: &str) -> &'a str {
        let marker = format!(r#"name="{name}""#);
        let at = html.find(&marker).unwrap();
        let start = html[..at].rfind("<input").unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..end]
    }

    fn select_tag(html: &str) -> &str {
        let start = html.find("<select").unwrap();
        let end = start + html[start..].find('>').unwrap();
        &html[start..end]
    }

    #[test]
    fn renders_six_controls() {
        let html = render_fresh_form();
        assert_eq!(html.matches("<input").count(), 4);
        assert_eq!(html.matches("<select").count(), 1);
        assert!(html.contains(r#"type="submit""#));
    }

    #[test]
    fn renders_inside_input_form() {
        let html = render_fresh_form();
        assert!(html.contains("<form"));
        assert!(html.contains("input-form"));
    }

    #[test]
    fn renders_placeholders_and_widget_types() {
        let html = render_fresh_form();
        assert!(html.contains(r#"placeholder="Departing from?""#));
        assert!(html.contains(r#"placeholder="Where to?""#));
        assert!(html.contains(r#"placeholder="Passengers""#));
        assert!(html.contains(r#"type="date""#));
        assert!(html.contains(r#"type="number""#));
    }

    #[test]
    fn renders_default_values() {
        let html = render_fresh_form();
        assert!(input_tag(&html, "passengers").contains(r#"value="1""#));
        assert!(select_tag(&html).contains(r#"value="One way""#));
        assert!(!html.contains("NaN"));
    }

    #[test]
    fn renders_both_trip_type_options() {
        let html = render_fresh_form();
        assert!(html.contains(">One Way</option>"));
        assert!(html.contains(">Round Trip</option>"));
    }

    #[test]
    fn submit_untouched_form_reports_defaults() {
        let (_, queries) = run(|_| {});
        assert_eq!(queries, vec![SearchQuery::default()]);
    }

    #[test]
    fn submit_reports_paris_to_tokyo() {
        let (_, queries) = run(|state| {
            state.set_departure("Paris".into());
            state.set_arrival("Tokyo".into());
            state.set_date("2025-06-01".into());
            state.set_passengers("2");
            state.set_trip_type("Round trip");
        });

        assert_eq!(
            queries,
            vec![SearchQuery {
                departure: "Paris".into(),
                arrival: "Tokyo".into(),
                date: "2025-06-01".into(),
                passengers: PassengerCount::Count(2),
                trip_type: TripType::RoundTrip,
            }]
        );
    }

    #[test]
    fn text_inputs_render_last_entry() {
        let (html, queries) = run(|state| {
            for text in ["P", "Pa", "Par", "Paris ", "Paris"] {
                state.set_departure(text.into());
            }
            for text in ["T", "", "  Tokyo  "] {
                state.set_arrival(text.into());
            }
        });

        assert!(input_tag(&html, "departure").contains(r#"value="Paris""#));
        // no trimming
        assert!(input_tag(&html, "arrival").contains(r#"value="  Tokyo  ""#));
        assert_eq!(queries[0].departure, "Paris");
        assert_eq!(queries[0].arrival, "  Tokyo  ");
    }

    #[test]
    fn trip_type_last_selection_wins() {
        let (html, queries) = run(|state| {
            state.set_trip_type("Round trip");
            state.set_trip_type("One way");
        });

        assert_eq!(queries[0].trip_type, TripType::OneWay);
        assert!(select_tag(&html).contains(r#"value="One way""#));
    }

    #[test]
    fn unknown_trip_type_keeps_selection() {
        let (html, queries) = run(|state| {
            state.set_trip_type("Round trip");
            state.set_trip_type("Multi city");
        });

        assert_eq!(queries[0].trip_type, TripType::RoundTrip);
        assert!(select_tag(&html).contains(r#"value="Round trip""#));
    }

    #[test]
    fn cleared_passengers_submit_and_render_nan() {
        let (html, queries) = run(|state| state.set_passengers(""));

        assert_eq!(queries[0].passengers, PassengerCount::NotANumber);
        assert!(input_tag(&html, "passengers").contains(r#"value="NaN""#));
    }
}
