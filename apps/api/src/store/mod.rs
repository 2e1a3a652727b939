// Storage: durable analysis history in Postgres, the ephemeral
// current-analysis slot in Redis. The engine itself never touches either.

pub mod current;
pub mod history;
