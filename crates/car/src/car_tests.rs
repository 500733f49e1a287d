// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[test]
fn test_new_uses_defaults() {
    let car = Car::new();
    assert_eq!(car.make(), "Volvo");
    assert_eq!(car.year(), 2007);
    assert_eq!(car.color(), "Unknown");
    assert_eq!(car.wheels(), 4);
}

#[test]
fn test_default_matches_new() {
    assert_eq!(Car::default(), Car::new());
}

#[test]
fn test_full_name_defaults() {
    assert_eq!(Car::new().full_name(), "2007 Volvo (Unknown)");
}

#[test]
fn test_full_name_customized() {
    let car = Car::with_config(CarConfig::default().make("Skoda").year(2018).color("blue"));
    assert_eq!(car.full_name(), "2018 Skoda (blue)");
}

#[test]
fn test_display_matches_full_name() {
    let car = Car::with_config(CarConfig::default().make("Saab"));
    assert_eq!(format!("{}", car), car.full_name());
}

#[test]
fn test_full_name_follows_mutation() {
    let mut car = Car::new();
    car.set_year(1999);
    car.set_color("red");
    assert_eq!(car.full_name(), "1999 Volvo (red)");
}

#[parameterized(
    make_only = { CarConfig::default().make("Audi"), "2007 Audi (Unknown)" },
    year_only = { CarConfig::default().year(1970), "1970 Volvo (Unknown)" },
    color_only = { CarConfig::default().color("green"), "2007 Volvo (green)" },
    make_and_color = { CarConfig::default().make("Fiat").color("red"), "2007 Fiat (red)" },
    nothing = { CarConfig::default(), "2007 Volvo (Unknown)" },
)]
fn partial_config_keeps_other_defaults(config: CarConfig, expected: &str) {
    assert_eq!(Car::from(config).full_name(), expected);
}

#[test]
fn test_colors_catalog() {
    let mut colors = Car::colors().to_vec();
    colors.sort_unstable();
    assert_eq!(colors, vec!["black", "blue", "green", "red"]);
}

#[parameterized(
    blue = { "blue", true },
    black = { "black", true },
    unknown = { "Unknown", false },
    silver = { "silver", false },
    wrong_case = { "Blue", false },
)]
fn catalog_color_membership(color: &str, expected: bool) {
    let car = Car::with_config(CarConfig::default().color(color));
    assert_eq!(car.is_catalog_color(), expected);
}

#[test]
fn test_setters_accept_out_of_domain_values() {
    let mut car = Car::new();
    car.set_year(9999);
    car.set_color("foo");
    car.set_make("");
    assert_eq!(car.year(), 9999);
    assert_eq!(car.color(), "foo");
    assert_eq!(car.make(), "");
}

proptest! {
    #[test]
    fn make_round_trips(make in ".*") {
        let mut car = Car::new();
        car.set_make(make.clone());
        prop_assert_eq!(car.make(), make.as_str());
    }

    #[test]
    fn year_round_trips(year in any::<i32>()) {
        let mut car = Car::new();
        car.set_year(year);
        prop_assert_eq!(car.year(), year);
    }

    #[test]
    fn color_round_trips(color in ".*") {
        let mut car = Car::new();
        car.set_color(color.clone());
        prop_assert_eq!(car.color(), color.as_str());
    }

    #[test]
    fn wheels_always_four(
        make in proptest::option::of("[A-Za-z]{0,12}"),
        year in proptest::option::of(any::<i32>()),
        color in proptest::option::of("[a-z]{0,8}"),
    ) {
        let car = Car::with_config(CarConfig { make, year, color });
        prop_assert_eq!(car.wheels(), 4);
    }

    #[test]
    fn full_name_format(make in "[A-Za-z]{1,12}", year in 1886i32..3000, color in "[a-z]{1,8}") {
        let car = Car::with_config(CarConfig::default().make(make.clone()).year(year).color(color.clone()));
        prop_assert_eq!(car.full_name(), format!("{} {} ({})", year, make, color));
    }
}
