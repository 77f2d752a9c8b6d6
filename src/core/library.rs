//! 模型库模块
//!
//! 按名称持有已导入的模型，并记录当前激活的模型。
//! 同名模型只导入一次；第一个导入的模型自动成为激活模型。

use std::path::Path;

use tracing::{debug, info};

use super::error::{ImportError, ImportResult};
use crate::geometry::loaders::ModelLoader;
use crate::geometry::model::Model;

/// 已导入模型的集合
#[derive(Debug, Default)]
pub struct ModelLibrary {
    /// (名称, 模型)，保持导入顺序
    models: Vec<(String, Model)>,
    active: Option<String>,
}

impl ModelLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 导入模型并以 `name`（缺省为路径）登记
    ///
    /// 该名称已存在时不会重新导入，直接返回已有模型。
    pub fn load<L: ModelLoader + ?Sized>(
        &mut self,
        loader: &L,
        path: &Path,
        name: Option<&str>,
    ) -> ImportResult<&Model> {
        let key = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => path.to_string_lossy().into_owned(),
        };

        if let Some(index) = self.position(&key) {
            debug!(model = %key, "模型已加载，跳过");
            return Ok(&self.models[index].1);
        }

        let model = loader.load_from_file(path)?;
        info!(model = %key, path = %path.display(), "模型加载成功");

        if self.models.is_empty() {
            self.active = Some(key.clone());
        }
        self.models.push((key, model));

        Ok(&self.models[self.models.len() - 1].1)
    }

    /// 切换激活模型
    pub fn set_active(&mut self, name: &str) -> ImportResult<()> {
        if self.position(name).is_none() {
            return Err(ImportError::NotFound(name.to_string()));
        }

        info!(model = name, "切换激活模型");
        self.active = Some(name.to_string());
        Ok(())
    }

    /// 当前激活的模型
    pub fn active(&self) -> Option<&Model> {
        self.active.as_deref().and_then(|name| self.get(name))
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&Model> {
        self.position(name).map(|i| &self.models[i].1)
    }

    /// 按导入顺序返回所有名称
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|(name, _)| name.as_str())
    }

    /// 卸载模型并交还所有权
    ///
    /// 被卸载的是激活模型时，激活状态被清空。
    pub fn unload(&mut self, name: &str) -> Option<Model> {
        let index = self.position(name)?;
        let (_, model) = self.models.remove(index);

        if self.active.as_deref() == Some(name) {
            self.active = None;
        }

        Some(model)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.models.iter().position(|(n, _)| n == name)
    }
}
