use serde_json::json;

fn medicine_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "Name of the medicine." },
            "dosage": { "type": "string", "description": "Dosage strength, e.g., \"500 mg\"." },
            "frequency": { "type": "integer", "description": "Number of times to take per day." },
            "timing": {
                "type": "array",
                "description": "Timings to take the medicine.",
                "items": {
                    "type": "string",
                    "enum": ["morning", "afternoon", "night"]
                }
            }
        }
    })
}

/// Returns the JSON schema for prescription and medicine LLM responses
pub fn get_medicine_list_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": medicine_schema()
    })
}

/// Returns the JSON schema for food recognition LLM responses
pub fn get_food_recognition_schema(vocabulary: &[String]) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "food_name": {
                "type": "string",
                "nullable": true,
                "enum": vocabulary
            }
        },
        "required": ["food_name"]
    })
}
