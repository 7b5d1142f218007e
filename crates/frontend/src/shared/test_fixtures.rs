use contracts::domain::a001_random_user::UserRecord;
use serde_json::json;

pub fn sample_user_json() -> serde_json::Value {
    json!({
        "gender": "male",
        "name": { "title": "Mr", "first": "Oliver", "last": "Hughes" },
        "location": {
            "street": { "number": 4213, "name": "Kings Road" },
            "city": "London",
            "state": "Greater London",
            "country": "United Kingdom",
            "postcode": "EC1A 1BB",
            "coordinates": { "latitude": "51.5", "longitude": "-0.12" },
            "timezone": { "offset": "0:00", "description": "Western Europe Time, London, Lisbon, Casablanca" }
        },
        "email": "oliver.hughes@example.com",
        "login": {
            "uuid": "0f6d5c1e-4a0b-4f3e-8a55-2b7f2c8e9d10",
            "username": "bigkoala482",
            "password": "sparky",
            "salt": "Qn3yb0xV",
            "md5": "3e1b2f4c5d6a7b8c9d0e1f2a3b4c5d6e",
            "sha1": "0a1b2c3d4e5f60718293a4b5c6d7e8f901234567",
            "sha256": "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        },
        "dob": { "date": "1984-11-03T08:21:40.123Z", "age": 40 },
        "registered": { "date": "2016-02-29T23:05:10.000Z", "age": 8 },
        "phone": "016977 1234",
        "cell": "07700 900123",
        "id": { "name": "NINO", "value": "QQ 12 34 56 C" },
        "picture": {
            "large": "https://randomuser.me/api/portraits/men/12.jpg",
            "medium": "https://randomuser.me/api/portraits/med/men/12.jpg",
            "thumbnail": "https://randomuser.me/api/portraits/thumb/men/12.jpg"
        },
        "nat": "GB"
    })
}

pub fn sample_user() -> UserRecord {
    serde_json::from_value(sample_user_json()).unwrap()
}
