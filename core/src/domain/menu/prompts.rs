//! Prompt texts sent to the language model.

pub const TODAY_MENU_SYSTEM_PROMPT: &str = "You are an experienced home cook. Suggest a healthy, \
well-balanced Japanese home-style dinner menu with a main dish, a side dish, a soup and a rice dish.";

pub const TODAY_MENU_USER_PROMPT: &str = "What should I cook for dinner today? Answer with a short \
explanation followed by a JSON object in this format:\n\
{\n  \"mainDish\": \"main dish\",\n  \"sideDish\": \"side dish\",\n  \"soup\": \"soup\",\n  \
\"rice\": \"rice dish\",\n  \"category\": \"japanese/western/chinese/other\",\n  \
\"description\": \"why this menu works\"\n}";

pub const IMAGE_EXTRACTION_PROMPT: &str = "Analyze the dishes and food in this image and return the \
menu as JSON in the format below. If several dishes are visible, split them into main dish, side \
dish, soup and rice dish.\n\n\
Format:\n{\n  \"mainDish\": \"main dish name\",\n  \"sideDish\": \"side dish name\",\n  \
\"soup\": \"soup name\",\n  \"rice\": \"rice dish name\",\n  \
\"category\": \"japanese/western/chinese/other\",\n  \"description\": \"details of the dishes\"\n}\n\n\
Use an empty string for anything you cannot identify.";

/// Token cap for both the suggestion and the image extraction calls.
pub const MAX_TOKENS: u32 = 500;

pub const TODAY_MENU_TEMPERATURE: f32 = 0.7;
