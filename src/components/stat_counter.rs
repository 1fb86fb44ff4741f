use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::observe::ObserveOnce;

/// Thousands separators, matching how the figures read in site copy.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.chars().rev().collect()
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
}

/// Animated hero statistic. Renders the target figure outright, then counts
/// up from zero in ~60 ticks of 20 ms the first time 30% of it scrolls into
/// view. Runs once per page load.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let span = use_node_ref();
    let shown = use_state(|| None::<u32>);
    let target = props.target;

    {
        let span = span.clone();
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let interval_handle = interval.clone();

                let observer = span.cast::<web_sys::Element>().and_then(|el| {
                    ObserveOnce::new(&el, 0.3, move || {
                        let step = target.div_ceil(60);
                        let current = Rc::new(Cell::new(0u32));
                        let tick = {
                            let interval = interval_handle.clone();
                            let shown = shown.clone();
                            let current = current.clone();
                            move || {
                                let mut next = current.get().saturating_add(step);
                                if next >= target {
                                    next = target;
                                    interval.borrow_mut().take();
                                }
                                current.set(next);
                                shown.set(Some(next));
                            }
                        };
                        *interval_handle.borrow_mut() = Some(Interval::new(20, tick));
                    })
                });

                move || {
                    drop(observer);
                    if let Some(interval) = interval.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (),
        );
    }

    let display = match *shown {
        Some(value) => format_count(value),
        None => format_count(target),
    };

    html! {
        <span ref={span} class="stat-value">{display}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_200), "1,200");
        assert_eq!(format_count(45_000), "45,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
