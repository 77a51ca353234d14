//! Fixed statements for the `kurban` table. Values are always bound as parameters.

pub const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS kurban (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        weight INT NOT NULL,
        price INT NOT NULL
    )
"#;

pub const SELECT_ALL: &str = "SELECT id, name, type, weight, price FROM kurban ORDER BY id";

pub const SELECT_BY_ID: &str = "SELECT id, name, type, weight, price FROM kurban WHERE id = $1";

pub const INSERT: &str =
    "INSERT INTO kurban (name, type, weight, price) VALUES ($1, $2, $3, $4) RETURNING id";

pub const UPDATE: &str =
    "UPDATE kurban SET name = $1, type = $2, weight = $3, price = $4 WHERE id = $5";

pub const DELETE_BY_ID: &str = "DELETE FROM kurban WHERE id = $1";

pub const PING: &str = "SELECT 1";
