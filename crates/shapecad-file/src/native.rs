//! ShapeCAD原生文件格式（.shapes）
//!
//! 布局：16 字节文件头 + Zstd 压缩的 MessagePack 负载。
//! 负载是显式的版本化结构：`{ next_id, shapes: [ {id, name, geometry} ] }`，
//! 几何数据以变体名作为判别字段。
//!
//! 保存时先写入同目录下的临时文件再重命名，失败的保存不会留下半写的目标文件。

use crate::error::FileError;
use serde::{Deserialize, Serialize};
use shapecad_core::entity::Shape;
use shapecad_core::registry::Snapshot;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// 文件魔数 "SHPS"
const MAGIC: &[u8; 4] = b"SHPS";

/// 当前文件格式版本
const FORMAT_VERSION: u32 = 1;

/// Zstd 压缩级别（1-22，3 是默认值，平衡速度和压缩比）
const COMPRESSION_LEVEL: i32 = 3;

/// 规范文件扩展名
pub const DEFAULT_EXTENSION: &str = "shapes";

/// 文件头（16 字节）
#[derive(Debug)]
struct FileHeader {
    /// 魔数 "SHPS"
    magic: [u8; 4],
    /// 格式版本
    version: u32,
    /// 标志位（预留）
    flags: u32,
    /// 压缩后负载长度
    payload_len: u32,
}

impl FileHeader {
    fn new(payload_len: u32) -> Self {
        Self {
            magic: *MAGIC,
            version: FORMAT_VERSION,
            flags: 0,
            payload_len,
        }
    }

    fn write(&self, writer: &mut impl Write) -> Result<(), std::io::Error> {
        writer.write_all(&self.magic)?;
        writer.write_all(&self.version.to_le_bytes())?;
        writer.write_all(&self.flags.to_le_bytes())?;
        writer.write_all(&self.payload_len.to_le_bytes())?;
        Ok(())
    }

    fn read(reader: &mut impl Read) -> Result<Self, FileError> {
        let mut magic = [0u8; 4];
        read_exact_or(reader, &mut magic, || {
            FileError::InvalidFormat("File is too short to be a shapes file".to_string())
        })?;

        if &magic != MAGIC {
            return Err(FileError::InvalidFormat(
                "Invalid magic number, not a shapes file".to_string(),
            ));
        }

        let mut buf = [0u8; 4];
        let mut next_u32 = |reader: &mut dyn Read| -> Result<u32, FileError> {
            read_exact_or(reader, &mut buf, || {
                FileError::InvalidFormat("Truncated file header".to_string())
            })?;
            Ok(u32::from_le_bytes(buf))
        };

        let version = next_u32(reader)?;
        let flags = next_u32(reader)?;
        let payload_len = next_u32(reader)?;

        Ok(Self {
            magic,
            version,
            flags,
            payload_len,
        })
    }
}

/// 读满缓冲区，提前遇到文件结尾时返回给定的格式错误
fn read_exact_or(
    reader: &mut (impl Read + ?Sized),
    buf: &mut [u8],
    on_eof: impl FnOnce() -> FileError,
) -> Result<(), FileError> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(on_eof()),
        Err(e) => Err(FileError::Io(e)),
    }
}

/// 可序列化的文件内容
#[derive(Debug, Serialize, Deserialize)]
struct FileContent {
    /// 下一个待分配的标识符
    next_id: u64,
    /// 所有图形（按标识符顺序）
    shapes: Vec<Shape>,
}

impl FileContent {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            next_id: snapshot.next_id,
            shapes: snapshot.shapes.values().cloned().collect(),
        }
    }

    /// 校验并转换为快照
    fn into_snapshot(self) -> Result<Snapshot, FileError> {
        if self.next_id == 0 || self.next_id == u64::MAX {
            return Err(FileError::Corruption(format!(
                "next_id counter {} is outside 1..{}",
                self.next_id,
                u64::MAX
            )));
        }

        let mut shapes = BTreeMap::new();
        for shape in self.shapes {
            let id = shape.id().ok_or_else(|| {
                FileError::Corruption(format!("Shape '{}' has no id", shape.name()))
            })?;

            if id.get() == 0 || id.get() >= self.next_id {
                return Err(FileError::Corruption(format!(
                    "Shape id {} is outside the issued range 1..{}",
                    id, self.next_id
                )));
            }

            shape
                .geometry()
                .validate()
                .map_err(|e| FileError::Corruption(format!("Shape {}: {}", id, e)))?;

            if shapes.insert(id, shape).is_some() {
                return Err(FileError::Corruption(format!("Duplicate shape id {}", id)));
            }
        }

        Ok(Snapshot {
            shapes,
            next_id: self.next_id,
        })
    }
}

/// 补全规范扩展名（已有则保持不变）
pub fn canonical_path(name: &str, extension: &str) -> PathBuf {
    let suffix = format!(".{}", extension);
    if name.ends_with(&suffix) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}{}", name, suffix))
    }
}

/// 与目标同目录的临时文件路径
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_file(path: &Path, header: &FileHeader, payload: &[u8]) -> Result<(), FileError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    header.write(&mut writer)?;
    writer.write_all(payload)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

/// 保存快照到文件
pub fn save(snapshot: &Snapshot, path: &Path) -> Result<(), FileError> {
    let content = FileContent::from_snapshot(snapshot);

    // 序列化为 MessagePack（字段名随数据保存）
    let msgpack_data = rmp_serde::to_vec_named(&content)?;

    // 使用 Zstd 压缩
    let compressed_data = zstd::encode_all(msgpack_data.as_slice(), COMPRESSION_LEVEL)?;
    let payload_len = u32::try_from(compressed_data.len()).map_err(|_| {
        FileError::InvalidFormat("Payload exceeds the 4 GiB format limit".to_string())
    })?;

    // 先写临时文件，再原子替换
    let tmp = temp_path(path);
    let written = write_file(&tmp, &FileHeader::new(payload_len), &compressed_data)
        .and_then(|()| fs::rename(&tmp, path).map_err(FileError::from));
    if let Err(e) = written {
        fs::remove_file(&tmp).ok();
        return Err(e);
    }

    tracing::info!(
        "Saved {} shapes to {} ({} bytes compressed)",
        content.shapes.len(),
        path.display(),
        compressed_data.len()
    );

    Ok(())
}

/// 从文件加载快照
pub fn load(path: &Path) -> Result<Snapshot, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    // 读取文件头
    let header = FileHeader::read(&mut reader)?;

    // 版本检查
    if header.version > FORMAT_VERSION {
        return Err(FileError::UnsupportedVersion(format!(
            "File version {} is newer than supported version {}",
            header.version, FORMAT_VERSION
        )));
    }

    // 读取压缩数据（按实际内容增长缓冲区，不预先信任文件头中的长度）
    let mut compressed_data = Vec::new();
    reader
        .by_ref()
        .take(u64::from(header.payload_len))
        .read_to_end(&mut compressed_data)?;
    if compressed_data.len() as u64 != u64::from(header.payload_len) {
        return Err(FileError::Corruption(format!(
            "Truncated payload: expected {} bytes, found {}",
            header.payload_len,
            compressed_data.len()
        )));
    }

    // 解压缩
    let msgpack_data = zstd::decode_all(compressed_data.as_slice())
        .map_err(|e| FileError::Corruption(format!("Decompression failed: {}", e)))?;

    // 反序列化并校验
    let content: FileContent = rmp_serde::from_slice(&msgpack_data)?;
    let snapshot = content.into_snapshot().inspect_err(|e| {
        tracing::warn!("Rejected snapshot {}: {}", path.display(), e);
    })?;

    tracing::info!(
        "Loaded {} shapes from {} (next id {})",
        snapshot.shapes.len(),
        path.display(),
        snapshot.next_id
    );

    Ok(snapshot)
}
