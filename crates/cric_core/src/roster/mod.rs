//! Team membership management.
//!
//! Membership is mutually exclusive: a player belongs to at most one team
//! at a time, and every change is recorded as a time-bounded
//! [`TeamPlayerRelation`]. The relation log is append-only; closing a
//! membership sets its end date, nothing is ever deleted.
//!
//! Batch operations run all existence and duplicate checks for the whole
//! request before staging any mutation, then commit the staged records in
//! one pass. The store is assumed to serialize operations per request;
//! concurrent writers must be fenced by the caller (one transaction or
//! team-keyed critical section per call).

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CricketError, EntityKind, Result};
use crate::models::{Player, Team, TeamPlayerRelation};
use crate::store::{Clock, RecordId, RecordStore};
use crate::validation::FieldValidator;


/// Roster state machine over an external record store.
pub struct RosterManager<S, C> {
    store: S,
    clock: C,
}

impl<S, C> RosterManager<S, C>
where
    S: RecordStore<Team> + RecordStore<Player> + RecordStore<TeamPlayerRelation>,
    C: Clock,
{
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Access to the backing store, mainly for seeding and assertions.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Hand the store back, e.g. to resume with a different clock.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validate and persist a new player record.
    pub fn register_player(&mut self, player: Player) -> Result<Player> {
        FieldValidator::validate_player(&player).map_err(CricketError::Validation)?;
        Ok(RecordStore::<Player>::save(&mut self.store, player))
    }

    /// Create a team with a unique name. Names are compared
    /// case-insensitively and stored uppercased.
    pub fn create_team(&mut self, name: &str) -> Result<Team> {
        FieldValidator::validate_team_name(name).map_err(CricketError::Validation)?;
        if self.team_name_taken(name) {
            return Err(CricketError::DuplicateName { name: name.to_string() });
        }
        let team = RecordStore::<Team>::save(&mut self.store, Team::new(name.to_uppercase()));
        log::info!("created team '{}'", team.name);
        Ok(team)
    }

    /// All-or-nothing batch creation: every name is validated and checked
    /// for uniqueness, within the batch and against existing teams, before
    /// any team is created.
    pub fn create_teams(&mut self, names: &[String]) -> Result<Vec<Team>> {
        let mut violations = Vec::new();
        for name in names {
            if let Err(mut found) = FieldValidator::validate_team_name(name) {
                violations.append(&mut found);
            }
        }
        if !violations.is_empty() {
            return Err(CricketError::Validation(violations));
        }

        let mut seen = BTreeSet::new();
        for name in names {
            if !seen.insert(name.to_uppercase()) || self.team_name_taken(name) {
                return Err(CricketError::DuplicateName { name: name.clone() });
            }
        }

        let teams = names.iter().map(|name| Team::new(name.to_uppercase())).collect();
        let created = RecordStore::<Team>::save_all(&mut self.store, teams);
        log::info!("created {} teams", created.len());
        Ok(created)
    }

    /// Add players to a team, transferring any that currently belong to
    /// another team. Existence and duplicate checks cover the whole batch
    /// before the first mutation; on success the target roster keeps its
    /// prior order with the new members appended in input order.
    pub fn add_players_to_team(&mut self, team_id: RecordId, player_ids: &[RecordId]) -> Result<Team> {
        let mut team = self
            .team(team_id)
            .ok_or(CricketError::NotFound { entity: EntityKind::Team, id: team_id })?;

        // Comparison pass: resolve every id before anything is written.
        let mut joining = Vec::with_capacity(player_ids.len());
        let mut batch = BTreeSet::new();
        for &player_id in player_ids {
            let player = self
                .player(player_id)
                .ok_or(CricketError::NotFound { entity: EntityKind::Player, id: player_id })?;
            if team.has_member(player_id) || !batch.insert(player_id) {
                return Err(CricketError::DuplicatePlayerInTeam { team_id, player_id });
            }
            joining.push(player);
        }

        // Staging pass: close out prior memberships, open new ones.
        let today = self.clock.now();
        let mut departed_teams: BTreeMap<RecordId, Team> = BTreeMap::new();
        let mut closed_relations = Vec::new();
        let mut opened_relations = Vec::new();
        for (player, &player_id) in joining.iter_mut().zip(player_ids) {
            if let Some(old_team_id) = player.team_id.filter(|&id| id != team_id) {
                match departed_teams.remove(&old_team_id).or_else(|| self.team(old_team_id)) {
                    Some(mut old_team) => {
                        old_team.players.retain(|member| member.id != Some(player_id));
                        departed_teams.insert(old_team_id, old_team);
                    }
                    None => {
                        log::warn!("player {} references missing team {}", player_id, old_team_id)
                    }
                }
                match self.open_relation(old_team_id, player_id) {
                    Some(mut relation) => {
                        relation.end_date = Some(today);
                        closed_relations.push(relation);
                    }
                    None => log::warn!(
                        "no open membership record for player {} in team {}",
                        player_id,
                        old_team_id
                    ),
                }
                log::info!("transferring player {} from team {}", player_id, old_team_id);
            }
            player.team_id = Some(team_id);
            opened_relations.push(TeamPlayerRelation::open(team_id, player_id, today));
        }

        // Commit pass.
        RecordStore::<Team>::save_all(&mut self.store, departed_teams.into_values().collect());
        RecordStore::<TeamPlayerRelation>::save_all(&mut self.store, closed_relations);
        let joined = RecordStore::<Player>::save_all(&mut self.store, joining);
        RecordStore::<TeamPlayerRelation>::save_all(&mut self.store, opened_relations);
        team.players.extend(joined);
        let team = RecordStore::<Team>::save(&mut self.store, team);
        log::debug!("committed {} roster additions to team {}", player_ids.len(), team_id);
        Ok(team)
    }

    /// Remove players from a team, clearing their team reference and
    /// closing their open relation. The whole batch must be current
    /// members before any mutation happens.
    pub fn remove_players_from_team(
        &mut self,
        team_id: RecordId,
        player_ids: &[RecordId],
    ) -> Result<Team> {
        let mut team = self
            .team(team_id)
            .ok_or(CricketError::NotFound { entity: EntityKind::Team, id: team_id })?;

        let mut leaving = Vec::with_capacity(player_ids.len());
        let mut batch = BTreeSet::new();
        for &player_id in player_ids {
            let player = self
                .player(player_id)
                .ok_or(CricketError::NotFound { entity: EntityKind::Player, id: player_id })?;
            if !team.has_member(player_id) || !batch.insert(player_id) {
                return Err(CricketError::PlayerNotInTeam { team_id, player_id });
            }
            leaving.push(player);
        }

        let today = self.clock.now();
        let mut closed_relations = Vec::new();
        for (player, &player_id) in leaving.iter_mut().zip(player_ids) {
            player.team_id = None;
            match self.open_relation(team_id, player_id) {
                Some(mut relation) => {
                    relation.end_date = Some(today);
                    closed_relations.push(relation);
                }
                None => log::warn!(
                    "no open membership record for player {} in team {}",
                    player_id,
                    team_id
                ),
            }
        }
        team.players.retain(|member| match member.id {
            Some(id) => !batch.contains(&id),
            None => true,
        });

        RecordStore::<Player>::save_all(&mut self.store, leaving);
        RecordStore::<TeamPlayerRelation>::save_all(&mut self.store, closed_relations);
        let team = RecordStore::<Team>::save(&mut self.store, team);
        log::debug!("committed {} roster removals from team {}", player_ids.len(), team_id);
        Ok(team)
    }

    /// Players not currently assigned to any team.
    pub fn free_agents(&self) -> Vec<Player> {
        RecordStore::<Player>::find_by(&self.store, &|player: &Player| player.team_id.is_none())
    }

    /// Full membership history for a player, oldest interval first.
    pub fn relations_for_player(&self, player_id: RecordId) -> Vec<TeamPlayerRelation> {
        let mut relations = RecordStore::<TeamPlayerRelation>::find_by(
            &self.store,
            &|relation: &TeamPlayerRelation| relation.player_id == player_id,
        );
        relations.sort_by_key(|relation| relation.start_date);
        relations
    }

    /// The team a player currently belongs to, if any.
    pub fn current_team(&self, player_id: RecordId) -> Option<Team> {
        self.player(player_id).and_then(|player| player.team_id).and_then(|id| self.team(id))
    }

    fn team(&self, id: RecordId) -> Option<Team> {
        RecordStore::<Team>::get(&self.store, id)
    }

    fn player(&self, id: RecordId) -> Option<Player> {
        RecordStore::<Player>::get(&self.store, id)
    }

    fn team_name_taken(&self, name: &str) -> bool {
        !RecordStore::<Team>::find_by(&self.store, &|team: &Team| {
            team.name.eq_ignore_ascii_case(name)
        })
        .is_empty()
    }

    fn open_relation(&self, team_id: RecordId, player_id: RecordId) -> Option<TeamPlayerRelation> {
        RecordStore::<TeamPlayerRelation>::find_by(&self.store, &|relation: &TeamPlayerRelation| {
            relation.team_id == team_id && relation.player_id == player_id && relation.is_open()
        })
        .into_iter()
        .next()
    }
}
