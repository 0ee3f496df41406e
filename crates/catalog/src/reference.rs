use nutrithali_shared::meal::{Macros, MealRecord, MealTag::*};

pub(crate) fn meals() -> Vec<MealRecord> {
    vec![
        MealRecord::new("poha", "Poha", [Vegetarian], Macros::new(320, 8, 6, 58)),
        MealRecord::new(
            "dal_makhani",
            "Dal Makhani",
            [Vegetarian, HighProtein],
            Macros::new(420, 18, 14, 56),
        ),
        MealRecord::new(
            "paneer_tikka",
            "Paneer Tikka",
            [Vegetarian, HighProtein],
            Macros::new(380, 28, 18, 20),
        ),
        MealRecord::new(
            "rajma_chawal",
            "Rajma Chawal",
            [Vegetarian],
            Macros::new(520, 16, 8, 90),
        ),
        MealRecord::new(
            "chicken_curry",
            "Chicken Curry",
            [NonVegetarian, HighProtein],
            Macros::new(480, 35, 20, 28),
        ),
        MealRecord::new(
            "grilled_fish",
            "Grilled Fish",
            [NonVegetarian, HighProtein, Seafood],
            Macros::new(360, 34, 12, 10),
        ),
        MealRecord::new(
            "quinoa_salad",
            "Quinoa Salad",
            [Vegan, GlutenFree],
            Macros::new(300, 10, 8, 48),
        ),
        MealRecord::new(
            "tofu_stir_fry",
            "Tofu Stir Fry",
            [Vegan, HighProtein],
            Macros::new(350, 22, 12, 30),
        ),
        MealRecord::new("upma", "Upma", [Vegetarian], Macros::new(330, 9, 7, 60)),
    ]
}
