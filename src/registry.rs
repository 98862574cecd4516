use anyhow::{anyhow, Result};
use std::fmt;

/// Registry-assigned template identifier. Id 0 is the reserved "none" sentinel
/// and never names a real projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectileId(pub u32);

impl ProjectileId {
    pub const NONE: ProjectileId = ProjectileId(0);

    pub fn index(self) -> u32 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default attributes a template carries straight out of the registry.
/// `source_mod == None` marks base-game content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectileAttributes {
    pub friendly: bool,
    pub hostile: bool,
    pub damage: i32,
    pub knockback: f32,
    pub source_mod: Option<String>,
}

/// Default-initialized snapshot of one projectile template.
#[derive(Debug, Clone)]
pub struct ProjectileDef {
    pub id: ProjectileId,
    pub name: String,
    pub attributes: ProjectileAttributes,
}

/// Host-side template registry. The browser only ever reads from it: the id
/// space and the default snapshots are owned by the host game.
pub trait ProjectileRegistry {
    /// Size of the id space. Valid template ids are `1..count()`.
    fn count(&self) -> u32;

    /// Default-initialized snapshot for one id. May fail per id; the catalog
    /// recovers locally rather than propagating (see `catalog::build_entries`).
    fn default_projectile(&self, id: ProjectileId) -> Result<ProjectileDef>;

    /// Name of the content provider responsible for an id, used to attribute
    /// per-entry failures. `None` when unknown.
    fn provider(&self, _id: ProjectileId) -> Option<String> {
        None
    }
}

struct StaticDef {
    name: String,
    attributes: ProjectileAttributes,
    faulty: bool,
}

/// Vec-backed registry for in-process catalogs and tests. Ids are handed out
/// in push order starting at 1.
#[derive(Default)]
pub struct StaticRegistry {
    defs: Vec<StaticDef>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, attributes: ProjectileAttributes) -> ProjectileId {
        self.defs.push(StaticDef { name: name.into(), attributes, faulty: false });
        ProjectileId(self.defs.len() as u32)
    }

    /// Registers an id whose snapshot fails to resolve, exercising the
    /// catalog's partial-failure path.
    pub fn push_faulty(&mut self, source_mod: impl Into<String>) -> ProjectileId {
        self.defs.push(StaticDef {
            name: String::new(),
            attributes: ProjectileAttributes { source_mod: Some(source_mod.into()), ..Default::default() },
            faulty: true,
        });
        ProjectileId(self.defs.len() as u32)
    }

    fn def(&self, id: ProjectileId) -> Option<&StaticDef> {
        if id.is_none() {
            return None;
        }
        self.defs.get(id.index() as usize - 1)
    }
}

impl ProjectileRegistry for StaticRegistry {
    fn count(&self) -> u32 {
        self.defs.len() as u32 + 1
    }

    fn default_projectile(&self, id: ProjectileId) -> Result<ProjectileDef> {
        let def = self.def(id).ok_or_else(|| anyhow!("projectile id {id} is out of range"))?;
        if def.faulty {
            return Err(anyhow!("name resolution failed for projectile id {id}"));
        }
        Ok(ProjectileDef { id, name: def.name.clone(), attributes: def.attributes.clone() })
    }

    fn provider(&self, id: ProjectileId) -> Option<String> {
        self.def(id).and_then(|def| def.attributes.source_mod.clone())
    }
}
