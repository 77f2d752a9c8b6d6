//! 材质定义模块
//!
//! Phong 风格的材质参数，从 MTL 文件转换而来，导入后不再修改。

/// 表面材质
///
/// 默认值描述一个中性灰色的哑光表面。
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,

    /// 环境光颜色 (Ka)
    pub ambient: [f32; 3],

    /// 漫反射颜色 (Kd)
    pub diffuse: [f32; 3],

    /// 镜面反射颜色 (Ks)
    pub specular: [f32; 3],

    /// 镜面反射指数 (Ns)
    pub shininess: f32,

    /// 不透明度 (d)，1.0 为完全不透明
    pub transparency: f32,

    /// 折射率 (Ni)
    pub refractive_index: f32,

    /// 漫反射贴图，相对于模型所在目录
    pub diffuse_texture: Option<String>,

    /// 法线贴图
    pub normal_texture: Option<String>,

    /// 镜面反射贴图
    pub specular_texture: Option<String>,
}

impl Material {
    pub const DEFAULT_NAME: &'static str = "default";

    /// 使用默认参数创建指定名称的材质
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// 是否引用了任何贴图
    pub fn has_textures(&self) -> bool {
        self.diffuse_texture.is_some()
            || self.normal_texture.is_some()
            || self.specular_texture.is_some()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            ambient: [0.2, 0.2, 0.2],
            diffuse: [0.8, 0.8, 0.8],
            specular: [1.0, 1.0, 1.0],
            shininess: 32.0,
            transparency: 1.0,
            refractive_index: 1.0,
            diffuse_texture: None,
            normal_texture: None,
            specular_texture: None,
        }
    }
}
