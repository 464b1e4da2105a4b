//! Built-in IPL 2025 data set, used when no snapshot has been exported.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    BattingScore, BowlingFigure, Innings, LeagueSnapshot, Match, Overs, Player, PlayerRole,
    PlayerStats, PointsTableEntry, Scorecard, Team, ValidationError,
};

/// The complete seed league.
pub fn league() -> Result<LeagueSnapshot, ValidationError> {
    Ok(LeagueSnapshot {
        teams: teams(),
        players: players(),
        matches: matches()?,
        points_table: points_table(),
    })
}

fn team(
    id: &str,
    name: &str,
    short: &str,
    colors: (&str, &str),
    captain: &str,
    ground: &str,
    titles: u32,
) -> Team {
    Team::new(id, name, short)
        .with_logo(&format!("/team-logos/{}.png", id))
        .with_colors(colors.0, colors.1)
        .with_captain(captain)
        .with_home_ground(ground)
        .with_championships(titles)
}

#[rustfmt::skip]
pub fn teams() -> Vec<Team> {
    vec![
        team("csk", "Chennai Super Kings", "CSK", ("#FFFF3C", "#0081E9"), "MS Dhoni", "M. A. Chidambaram Stadium", 5),
        team("mi", "Mumbai Indians", "MI", ("#004B8D", "#D1AB3E"), "Hardik Pandya", "Wankhede Stadium", 5),
        team("rcb", "Royal Challengers Bangalore", "RCB", ("#EC1C24", "#000000"), "Faf du Plessis", "M. Chinnaswamy Stadium", 0),
        team("kkr", "Kolkata Knight Riders", "KKR", ("#3A225D", "#B3A123"), "Shreyas Iyer", "Eden Gardens", 2),
        team("dc", "Delhi Capitals", "DC", ("#0078BC", "#EF1C25"), "Rishabh Pant", "Arun Jaitley Stadium", 0),
        team("srh", "Sunrisers Hyderabad", "SRH", ("#F26522", "#000000"), "Pat Cummins", "Rajiv Gandhi Intl. Cricket Stadium", 1),
        team("rr", "Rajasthan Royals", "RR", ("#EA1A85", "#254AA5"), "Sanju Samson", "Sawai Mansingh Stadium", 1),
        team("pbks", "Punjab Kings", "PBKS", ("#ED1B24", "#A7A9AC"), "Shikhar Dhawan", "IS Bindra Stadium", 0),
        team("gt", "Gujarat Titans", "GT", ("#1D428A", "#B0C4DE"), "Shubman Gill", "Narendra Modi Stadium", 1),
        team("lsg", "Lucknow Super Giants", "LSG", ("#A72056", "#FFCC00"), "KL Rahul", "BRSABV Ekana Cricket Stadium", 0),
    ]
}

pub fn players() -> Vec<Player> {
    vec![
        Player::new("p1", "MS Dhoni", "csk", PlayerRole::WicketKeeper)
            .with_image("/player-images/ms-dhoni.png")
            .with_styles("Right Handed", "Right-arm medium")
            .with_profile("Indian", 42)
            .with_stats(PlayerStats {
                matches: 250,
                runs: 5082,
                highest_score: 84,
                average: 38.79,
                strike_rate: 135.76,
                fifties: 24,
                hundreds: 0,
                wickets: 0,
                best_bowling: "-".to_string(),
                economy_rate: 0.0,
            }),
        Player::new("p2", "Virat Kohli", "rcb", PlayerRole::Batsman)
            .with_image("/player-images/virat-kohli.png")
            .with_styles("Right Handed", "Right-arm medium")
            .with_profile("Indian", 35)
            .with_stats(PlayerStats {
                matches: 237,
                runs: 7263,
                highest_score: 113,
                average: 37.24,
                strike_rate: 130.02,
                fifties: 50,
                hundreds: 7,
                wickets: 4,
                best_bowling: "2/25".to_string(),
                economy_rate: 8.83,
            }),
        Player::new("p3", "Rohit Sharma", "mi", PlayerRole::Batsman)
            .with_image("/player-images/rohit-sharma.png")
            .with_styles("Right Handed", "Right-arm off break")
            .with_profile("Indian", 36)
            .with_stats(PlayerStats {
                matches: 243,
                runs: 6211,
                highest_score: 109,
                average: 29.58,
                strike_rate: 130.04,
                fifties: 42,
                hundreds: 1,
                wickets: 15,
                best_bowling: "2/6".to_string(),
                economy_rate: 8.99,
            }),
        Player::new("p4", "Jasprit Bumrah", "mi", PlayerRole::Bowler)
            .with_image("/player-images/jasprit-bumrah.png")
            .with_styles("Right Handed", "Right-arm fast")
            .with_profile("Indian", 30)
            .with_stats(PlayerStats {
                matches: 120,
                runs: 56,
                highest_score: 16,
                average: 5.6,
                strike_rate: 85.0,
                fifties: 0,
                hundreds: 0,
                wickets: 145,
                best_bowling: "5/10".to_string(),
                economy_rate: 7.39,
            }),
        Player::new("p5", "Ravindra Jadeja", "csk", PlayerRole::AllRounder)
            .with_image("/player-images/ravindra-jadeja.png")
            .with_styles("Left Handed", "Left-arm orthodox")
            .with_profile("Indian", 35)
            .with_stats(PlayerStats {
                matches: 226,
                runs: 2692,
                highest_score: 62,
                average: 26.92,
                strike_rate: 135.77,
                fifties: 3,
                hundreds: 0,
                wickets: 152,
                best_bowling: "5/16".to_string(),
                economy_rate: 7.61,
            }),
    ]
}

fn start(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, day)
        .and_then(|d| d.and_hms_opt(hour, 30, 0))
        .unwrap_or_default()
}

fn batting(
    player: &str,
    (runs, balls): (u32, u32),
    (fours, sixes): (u32, u32),
    strike_rate: f64,
    dismissal: &str,
) -> BattingScore {
    BattingScore {
        player_id: player.into(),
        runs,
        balls,
        fours,
        sixes,
        strike_rate,
        dismissal: dismissal.to_string(),
    }
}

fn bowling(
    player: &str,
    overs: u32,
    runs: u32,
    wickets: u32,
    economy: f64,
) -> Result<BowlingFigure, ValidationError> {
    Ok(BowlingFigure {
        player_id: player.into(),
        overs: Overs::new(overs, 0)?,
        maidens: 0,
        runs,
        wickets,
        economy,
    })
}

pub fn matches() -> Result<Vec<Match>, ValidationError> {
    let chepauk = "M. A. Chidambaram Stadium, Chennai";
    let uppal = "Rajiv Gandhi Intl. Cricket Stadium, Hyderabad";

    let m6 = Scorecard::new()
        .with_innings(
            Innings::new("rcb", 156, 9, Overs::new(20, 0)?)
                .with_batting(batting("p2", (65, 48), (6, 2), 135.42, "c Dhoni b Jadeja"))
                .with_bowling(bowling("p5", 4, 28, 3, 7.0)?),
        )
        .with_innings(
            Innings::new("csk", 157, 5, Overs::new(18, 4)?)
                .with_batting(batting("p1", (32, 17), (2, 3), 188.24, BattingScore::NOT_OUT)),
        );

    let m7 = Scorecard::new()
        .with_innings(
            Innings::new("dc", 162, 8, Overs::new(20, 0)?)
                .with_bowling(bowling("p4", 4, 23, 3, 5.75)?),
        )
        .with_innings(
            Innings::new("mi", 165, 3, Overs::new(18, 2)?)
                .with_batting(batting("p3", (78, 47), (8, 3), 165.96, "c Pant b Axar")),
        );

    let m8 = Scorecard::new()
        .with_innings(
            Innings::new("csk", 193, 6, Overs::new(20, 0)?)
                .with_batting(batting("p1", (47, 21), (3, 5), 223.81, "c Abbott b Natarajan")),
        )
        .with_innings(
            Innings::new("srh", 126, 3, Overs::new(14, 2)?)
                .with_bowling(bowling("p5", 3, 26, 2, 8.67)?),
        );

    Ok(vec![
        Match::upcoming("m1", "csk", "mi", start(7, 19), chepauk),
        Match::upcoming("m2", "rcb", "kkr", start(8, 19), "M. Chinnaswamy Stadium, Bangalore"),
        Match::upcoming("m3", "rr", "dc", start(9, 19), "Sawai Mansingh Stadium, Jaipur"),
        Match::upcoming("m4", "srh", "pbks", start(10, 19), uppal),
        Match::upcoming("m5", "gt", "lsg", start(11, 19), "Narendra Modi Stadium, Ahmedabad"),
        Match::upcoming("m6", "csk", "rcb", start(3, 19), chepauk)
            .into_live(m6)
            .into_completed("Chennai Super Kings won by 5 wickets")?,
        Match::upcoming("m7", "mi", "dc", start(4, 19), "Wankhede Stadium, Mumbai")
            .into_live(m7)
            .into_completed("Mumbai Indians won by 7 wickets")?,
        Match::upcoming("m8", "srh", "csk", start(5, 15), uppal).into_live(m8),
    ])
}

pub fn points_table() -> Vec<PointsTableEntry> {
    let row = |team: &str, won: u32, lost: u32, nrr: f64| {
        PointsTableEntry::new(team)
            .with_record(won, lost, 0, 0)
            .with_points(won * crate::models::POINTS_PER_WIN)
            .with_net_run_rate(nrr)
    };
    vec![
        // csk's live match counts as played
        row("csk", 1, 0, 0.800).with_played(2),
        row("mi", 1, 0, 0.745),
        row("rr", 1, 0, 0.700),
        row("gt", 1, 0, 0.500),
        row("kkr", 1, 0, 0.325),
        row("pbks", 0, 1, -0.325),
        row("lsg", 0, 1, -0.500),
        row("dc", 0, 1, -0.745),
        row("rcb", 0, 1, -0.750),
        row("srh", 0, 0, 0.000),
    ]
}
