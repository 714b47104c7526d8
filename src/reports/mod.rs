mod tables;

pub use self::tables::{
    ball as print_ball_report, batch as print_batch_ranking, player as print_player_report,
    reboot as print_reboot_report,
};
