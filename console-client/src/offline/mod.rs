mod local_game;

pub use local_game::local_game_task;
