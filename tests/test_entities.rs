use space_invaders::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(Direction::Up, Direction::Up);
    assert_ne!(Direction::Up, Direction::Down);
    assert_ne!(Direction::Left, Direction::Right);
    assert_eq!(AlienKind::Crab, AlienKind::Crab);
    assert_ne!(AlienKind::Crab, AlienKind::Squid);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);

    // Clone must produce an equal value
    let kind = AlienKind::Octopus;
    assert_eq!(kind.clone(), AlienKind::Octopus);
}

#[test]
fn alien_kind_widths() {
    assert_eq!(AlienKind::Octopus.width(), ALIEN0_WIDTH);
    assert_eq!(AlienKind::Crab.width(), ALIEN1_WIDTH);
    assert_eq!(AlienKind::Squid.width(), ALIEN2_WIDTH);
    assert_eq!(AlienKind::Octopus.width(), 24);
    assert_eq!(AlienKind::Crab.width(), 22);
    assert_eq!(AlienKind::Squid.width(), 16);
}

#[test]
fn action_default_is_idle() {
    let action = Action::default();
    assert!(!action.left);
    assert!(!action.fire);
    assert!(!action.right);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        swarm: Swarm {
            aliens: vec![vec![Alien {
                x: 20,
                y: 146,
                kind: AlienKind::Octopus,
            }]],
            vel_x: 1,
            vel_y: 10,
            direction: Direction::Right,
            sprite_number: 0,
        },
        player: Player {
            x: 270,
            y: 340,
            vel: 3,
        },
        projectiles: Vec::new(),
        frame: 0,
        status: GameStatus::Playing,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99;
    cloned.swarm.aliens[0].clear();
    cloned.projectiles.push(Projectile {
        x: 5,
        y: 5,
        direction: Direction::Down,
        vel: 10,
        valid: true,
    });

    assert_eq!(original.player.x, 270);
    assert_eq!(original.swarm.aliens[0].len(), 1);
    assert!(original.projectiles.is_empty());
}
